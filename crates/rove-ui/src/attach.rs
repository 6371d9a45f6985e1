//! The one-shot attachment entry point.
//!
//! Given a root list element believed to be a well-formed menu tree,
//! [`Menubar::attach`] validates the shape contract and constructs the
//! whole container/leaf tree in one synchronous pass. Validation failures
//! abort the attachment and propagate to the caller.

use std::collections::HashMap;

use rove_core::{ElementId, ElementKind, Surface, Timers};

use crate::error::AttachError;
use crate::tree::{Container, MenuRef, Menubar, Node, NodeId, Popup, PopupId, Route};

impl<S: Surface> Menubar<S> {
    /// Build a menubar from the tree rooted at `root`.
    ///
    /// Shape contract: `root` is a list element with at least one entry
    /// child; each entry's first element child is a trigger; a trigger may
    /// be immediately followed by a list element representing its submenu,
    /// recursively satisfying the same contract.
    ///
    /// On success every container's first item holds the roving tab stop,
    /// every popup starts hidden, and every submenu-owning trigger carries
    /// a cleared expanded indicator. `attach` consumes the surface: the
    /// returned value is the sole owner of the constructed tree, and
    /// dropping it tears everything down together.
    pub fn attach(mut surface: S, root: ElementId) -> Result<Self, AttachError> {
        let mut builder = TreeBuilder {
            surface: &mut surface,
            nodes: Vec::new(),
            popups: Vec::new(),
            routes: HashMap::new(),
        };

        let bar = builder.scan(root, MenuRef::Bar)?;
        builder.routes.insert(root, Route::BarRoot);

        let TreeBuilder {
            nodes,
            popups,
            routes,
            ..
        } = builder;
        log::debug!(
            "attached menubar: {} top-level items, {} popups",
            bar.items.len(),
            popups.len()
        );

        Ok(Self {
            surface,
            bar,
            nodes,
            popups,
            routes,
            timers: Timers::new(),
        })
    }
}

struct TreeBuilder<'a, S: Surface> {
    surface: &'a mut S,
    nodes: Vec<Node>,
    popups: Vec<Popup>,
    routes: HashMap<ElementId, Route>,
}

impl<S: Surface> TreeBuilder<'_, S> {
    /// Scan the entry children of `list`, building one node per entry and
    /// recursing into declared submenus.
    fn scan(&mut self, list: ElementId, owner: MenuRef) -> Result<Container, AttachError> {
        let mut container = Container::empty(list);

        let mut child = self.surface.first_child(list);
        if child.is_none() {
            return Err(AttachError::NoChildren(list));
        }

        while let Some(entry) = child {
            let trigger = self
                .surface
                .first_child(entry)
                .filter(|&t| self.surface.kind(t) == ElementKind::Trigger)
                .ok_or(AttachError::BadTrigger(entry))?;

            let id = NodeId(self.nodes.len());
            self.nodes.push(Node {
                trigger,
                container: owner,
                submenu: None,
                has_focus: false,
                has_hover: false,
                is_top_level: owner == MenuRef::Bar,
            });
            self.routes.insert(trigger, Route::Node(id));
            self.surface.set_tab_stop(trigger, false);

            let label = self.surface.label(trigger);
            container.first_chars.push(first_char(&label));
            container.items.push(id);

            // A list element right after the trigger declares a submenu.
            if let Some(next) = self.surface.next_sibling(trigger) {
                if self.surface.kind(next) == ElementKind::List {
                    let pid = self.add_popup(next, id)?;
                    self.nodes[id.0].submenu = Some(pid);
                }
            }

            child = self.surface.next_sibling(entry);
        }

        // At least one entry existed, and each either produced an item or
        // failed the scan.
        container.roving = container.items[0];
        let roving_trigger = self.nodes[container.roving.0].trigger;
        self.surface.set_tab_stop(roving_trigger, true);

        Ok(container)
    }

    fn add_popup(&mut self, list: ElementId, controller: NodeId) -> Result<PopupId, AttachError> {
        // Reserve the id before recursing so child nodes can refer back to
        // their owning popup.
        let pid = PopupId(self.popups.len());
        self.popups.push(Popup {
            list: Container::empty(list),
            controller,
            is_open: false,
        });

        let scanned = self.scan(list, MenuRef::Popup(pid))?;
        self.popups[pid.0].list = scanned;
        self.routes.insert(list, Route::PopupRoot(pid));

        // Popups start closed, with a coherent collapsed indicator.
        self.surface.hide(list);
        let trigger = self.nodes[controller.0].trigger;
        self.surface.set_expanded(trigger, false);

        Ok(pid)
    }
}

/// Lowercased first character of a trimmed label, for type-ahead.
fn first_char(label: &str) -> Option<char> {
    let c = label.trim().chars().next()?;
    c.to_lowercase().next()
}

#[cfg(test)]
mod tests {
    use rove_core::{ElementKind, MemorySurface};

    use super::*;
    use crate::tree::fixture::three_level;

    #[test]
    fn empty_root_is_an_error() {
        let mut s = MemorySurface::new();
        let root = s.list(None);
        let err = Menubar::attach(s, root).unwrap_err();
        assert_eq!(err, AttachError::NoChildren(root));
    }

    #[test]
    fn entry_without_trigger_is_an_error() {
        let mut s = MemorySurface::new();
        let root = s.list(None);
        s.entry(root, "Ok");
        let entry = s.element(Some(root), ElementKind::Item, "");
        s.element(Some(entry), ElementKind::List, "");
        let err = Menubar::attach(s, root).unwrap_err();
        assert_eq!(err, AttachError::BadTrigger(entry));
    }

    #[test]
    fn empty_submenu_aborts_the_whole_attach() {
        let mut s = MemorySurface::new();
        let root = s.list(None);
        let file = s.entry(root, "File");
        let menu = s.submenu(file);
        let err = Menubar::attach(s, root).unwrap_err();
        assert_eq!(err, AttachError::NoChildren(menu));
    }

    #[test]
    fn initial_roving_marker_is_first_item_per_container() {
        let t = three_level();
        let s = t.bar.surface();
        assert!(s.is_tab_stop(t.file));
        assert!(!s.is_tab_stop(t.edit));
        assert!(!s.is_tab_stop(t.view));
        // Popups get a roving marker of their own.
        assert!(s.is_tab_stop(t.undo));
        assert!(!s.is_tab_stop(t.redo));
        assert!(s.is_tab_stop(t.repeat));
    }

    #[test]
    fn popups_start_hidden_and_collapsed() {
        let t = three_level();
        let s = t.bar.surface();
        assert!(!s.is_visible(t.edit_menu));
        assert!(!s.is_visible(t.redo_menu));
        assert_eq!(s.is_expanded(t.edit), Some(false));
        assert_eq!(s.is_expanded(t.redo), Some(false));
        // Triggers without a submenu carry no indicator at all.
        assert_eq!(s.is_expanded(t.file), None);
    }

    #[test]
    fn first_chars_are_trimmed_and_lowercased() {
        assert_eq!(first_char("  Banana"), Some('b'));
        assert_eq!(first_char("École"), Some('é'));
        assert_eq!(first_char("   "), None);
        assert_eq!(first_char(""), None);
    }
}
