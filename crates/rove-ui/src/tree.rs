//! The menu tree: data model, event routing, and timer pump.
//!
//! Nodes and popups live in arenas indexed by copyable ids; every
//! back-reference (item → owning container → controlling item) is an id,
//! so walking the tree in either direction is an explicit loop with an
//! obvious termination condition.

use std::collections::HashMap;
use std::time::Instant;

use rove_core::{ElementId, Event, Surface, Timers};

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Handle to one leaf item of the menu tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Handle to one popup menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PopupId(pub(crate) usize);

/// A reference to a container: the menubar itself or one of its popups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuRef {
    /// The always-visible root menubar.
    Bar,
    /// A popup menu.
    Popup(PopupId),
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// One leaf item: a trigger element plus its optional submenu.
#[derive(Debug)]
pub(crate) struct Node {
    pub trigger: ElementId,
    /// The container this item belongs to.
    pub container: MenuRef,
    /// Submenu owned by this item, fixed at attach time.
    pub submenu: Option<PopupId>,
    pub has_focus: bool,
    pub has_hover: bool,
    pub is_top_level: bool,
}

/// State shared by the menubar and every popup: an ordered run of items
/// with a single roving tab stop and aggregate focus/hover flags.
#[derive(Debug)]
pub(crate) struct Container {
    pub root: ElementId,
    /// Items in host order. Non-empty after a successful attach.
    pub items: Vec<NodeId>,
    /// Lowercased first character of each item's label, parallel to
    /// `items`. `None` for empty labels (they never match).
    pub first_chars: Vec<Option<char>>,
    /// The item currently holding the roving tab stop.
    pub roving: NodeId,
    pub has_focus: bool,
    pub has_hover: bool,
}

impl Container {
    pub(crate) fn empty(root: ElementId) -> Self {
        Self {
            root,
            items: Vec::new(),
            first_chars: Vec::new(),
            roving: NodeId(0),
            has_focus: false,
            has_hover: false,
        }
    }
}

/// A hideable container revealed by opening its controlling item.
#[derive(Debug)]
pub(crate) struct Popup {
    pub list: Container,
    /// The item that owns this popup.
    pub controller: NodeId,
    pub is_open: bool,
}

/// Where an element's events are routed.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Route {
    Node(NodeId),
    BarRoot,
    PopupRoot(PopupId),
}

/// A deferred re-check of one popup's close eligibility.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CloseCheck {
    pub popup: PopupId,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What the host should do with the event it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Not handled: let the event propagate and run its default behavior.
    Pass,
    /// Handled: stop propagation and prevent the default behavior.
    Consumed,
}

// ---------------------------------------------------------------------------
// Menubar
// ---------------------------------------------------------------------------

/// The root menu widget: owns the host surface and the whole tree of
/// items and popups built by [`Menubar::attach`].
#[derive(Debug)]
pub struct Menubar<S: Surface> {
    pub(crate) surface: S,
    pub(crate) bar: Container,
    pub(crate) nodes: Vec<Node>,
    pub(crate) popups: Vec<Popup>,
    pub(crate) routes: HashMap<ElementId, Route>,
    pub(crate) timers: Timers<PopupId, CloseCheck>,
}

impl<S: Surface> Menubar<S> {
    /// Deliver a host event to the element it occurred on.
    ///
    /// Events on elements that are not part of the menu tree pass
    /// through untouched.
    pub fn deliver(&mut self, el: ElementId, event: Event) -> Outcome {
        match self.routes.get(&el).copied() {
            Some(Route::Node(id)) => self.node_event(id, event),
            Some(Route::BarRoot) => self.container_event(MenuRef::Bar, event),
            Some(Route::PopupRoot(p)) => self.container_event(MenuRef::Popup(p), event),
            None => Outcome::Pass,
        }
    }

    /// Run every deferred close check whose delay has elapsed at `now`.
    ///
    /// Checks read live focus/hover state when they run, so a check
    /// scheduled before an intervening hover or focus event is harmless.
    pub fn tick(&mut self, now: Instant) {
        let due = self.timers.pop_due(now);
        for check in due {
            self.close_popup(check.popup, false);
        }
    }

    /// When the earliest pending close check comes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The popup whose list root is `el`, if any.
    pub fn popup_for(&self, el: ElementId) -> Option<PopupId> {
        match self.routes.get(&el) {
            Some(Route::PopupRoot(p)) => Some(*p),
            _ => None,
        }
    }

    /// The item whose trigger is `el`, if any.
    pub fn node_for(&self, el: ElementId) -> Option<NodeId> {
        match self.routes.get(&el) {
            Some(Route::Node(n)) => Some(*n),
            _ => None,
        }
    }

    /// The submenu owned by `node`, if it has one.
    pub fn submenu_of(&self, node: NodeId) -> Option<PopupId> {
        self.nodes[node.0].submenu
    }

    /// Whether `popup` is currently open.
    pub fn is_open(&self, popup: PopupId) -> bool {
        self.popups[popup.0].is_open
    }

    /// Whether any popup in the tree is currently open.
    pub fn any_open(&self) -> bool {
        self.popups.iter().any(|p| p.is_open)
    }

    // -- internal accessors --

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn container(&self, m: MenuRef) -> &Container {
        match m {
            MenuRef::Bar => &self.bar,
            MenuRef::Popup(p) => &self.popups[p.0].list,
        }
    }

    pub(crate) fn container_mut(&mut self, m: MenuRef) -> &mut Container {
        match m {
            MenuRef::Bar => &mut self.bar,
            MenuRef::Popup(p) => &mut self.popups[p.0].list,
        }
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------
