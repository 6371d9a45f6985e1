//! Focus management: the contract shared by the menubar and every popup.
//!
//! One algorithm serves both container variants: a roving tab stop moved
//! by [`Menubar::set_focus_to_item`], cyclic previous/next traversal, and
//! two-pass wrap-around first-character search. Upward escalation from a
//! popup to the menubar walks explicit back-references, never recursion.

use rove_core::Surface;

use crate::tree::{MenuRef, Menubar, NodeId, PopupId};

/// How focus should return to a popup's controller chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FocusCommand {
    /// Focus the immediate controller and stop.
    Return,
    /// Escalate to the top level, then move to the previous item.
    Previous,
    /// Escalate to the top level, then move to the next item.
    Next,
}

impl<S: Surface> Menubar<S> {
    /// Move the roving tab stop and true input focus to `target`.
    ///
    /// Every item in the container drops its tab stop and has any open
    /// submenu force-closed. If the previously roving item had its
    /// submenu expanded and `target` owns one, `target`'s submenu opens:
    /// lateral navigation stays in "expanded mode" while the user is
    /// browsing an open level.
    pub(crate) fn set_focus_to_item(&mut self, m: MenuRef, target: NodeId) {
        let items = self.container(m).items.clone();
        let prev = self.container(m).roving;
        let was_expanded = self
            .node(prev)
            .submenu
            .is_some_and(|p| self.popups[p.0].is_open);

        for id in items {
            let trigger = self.node(id).trigger;
            self.surface.set_tab_stop(trigger, false);
            if let Some(p) = self.node(id).submenu {
                if self.popups[p.0].is_open {
                    self.close_popup(p, true);
                }
            }
        }

        let trigger = self.node(target).trigger;
        self.surface.focus(trigger);
        self.surface.set_tab_stop(trigger, true);
        self.container_mut(m).roving = target;

        if was_expanded {
            if let Some(p) = self.node(target).submenu {
                self.open_popup(p);
            }
        }
    }

    pub(crate) fn set_focus_to_first_item(&mut self, m: MenuRef) {
        let Some(&first) = self.container(m).items.first() else {
            return;
        };
        self.set_focus_to_item(m, first);
    }

    pub(crate) fn set_focus_to_last_item(&mut self, m: MenuRef) {
        let Some(&last) = self.container(m).items.last() else {
            return;
        };
        self.set_focus_to_item(m, last);
    }

    /// Cyclic: moving before the first item wraps to the last.
    pub(crate) fn set_focus_to_previous_item(&mut self, m: MenuRef, current: NodeId) {
        let items = &self.container(m).items;
        let Some(pos) = items.iter().position(|&i| i == current) else {
            return;
        };
        let target = if pos == 0 {
            items[items.len() - 1]
        } else {
            items[pos - 1]
        };
        self.set_focus_to_item(m, target);
    }

    /// Cyclic: moving past the last item wraps to the first.
    pub(crate) fn set_focus_to_next_item(&mut self, m: MenuRef, current: NodeId) {
        let items = &self.container(m).items;
        let Some(pos) = items.iter().position(|&i| i == current) else {
            return;
        };
        let target = if pos == items.len() - 1 {
            items[0]
        } else {
            items[pos + 1]
        };
        self.set_focus_to_item(m, target);
    }

    /// Case-insensitive type-ahead: focus the first item after `current`
    /// whose label starts with `ch`, wrapping to the start if the rest of
    /// the container has no match. No match anywhere: no-op.
    pub(crate) fn set_focus_by_first_character(&mut self, m: MenuRef, current: NodeId, ch: char) {
        let lower = ch.to_lowercase().next().unwrap_or(ch);

        let items = &self.container(m).items;
        let Some(pos) = items.iter().position(|&i| i == current) else {
            return;
        };
        let mut start = pos + 1;
        if start == items.len() {
            start = 0;
        }

        let index = self
            .index_by_first_char(m, start, lower)
            .or_else(|| self.index_by_first_char(m, 0, lower));

        if let Some(i) = index {
            let target = self.container(m).items[i];
            self.set_focus_to_item(m, target);
        }
    }

    /// Linear scan of the first-character table from `start` to the end.
    pub(crate) fn index_by_first_char(&self, m: MenuRef, start: usize, ch: char) -> Option<usize> {
        let chars = &self.container(m).first_chars;
        (start..chars.len()).find(|&i| chars[i] == Some(ch))
    }

    /// Hand focus back to `popup`'s controller chain.
    ///
    /// `Previous`/`Next` conceptually operate on the top-level menubar no
    /// matter how deep the popup is, so they walk ancestor popups upward,
    /// force-closing each level and clearing its controller's focus flag,
    /// until a top-level controller is reached.
    pub(crate) fn set_focus_to_controller(&mut self, popup: PopupId, command: FocusCommand) {
        let controller = self.popups[popup.0].controller;

        if command == FocusCommand::Return {
            let trigger = self.node(controller).trigger;
            self.surface.focus(trigger);
            return;
        }

        let mut node = controller;
        loop {
            if self.node(node).is_top_level {
                break;
            }
            let MenuRef::Popup(owning) = self.node(node).container else {
                break;
            };
            self.close_popup(owning, true);
            self.node_mut(node).has_focus = false;
            node = self.popups[owning.0].controller;
        }

        if command == FocusCommand::Previous {
            self.set_focus_to_previous_item(MenuRef::Bar, node);
        } else {
            self.set_focus_to_next_item(MenuRef::Bar, node);
        }
    }
}
