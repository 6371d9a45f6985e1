//! The host surface: [`ElementId`], [`ElementKind`], the [`Surface`]
//! capability trait, and the in-memory [`MemorySurface`] implementation.
//!
//! The menu state machine never touches a rendering host directly. All it
//! needs from one is a handful of structure queries (to discover the menu
//! tree at attach time) and a handful of effects (focus, roving tab stop,
//! expanded indicator, show/hide at an offset, synthesized activation).
//! Anything implementing [`Surface`] can host the widget; tests and demos
//! use [`MemorySurface`].

mod memory;

pub use memory::MemorySurface;

use crate::geom::{Point, Rect};

// ---------------------------------------------------------------------------
// ElementId / ElementKind
// ---------------------------------------------------------------------------

/// An opaque handle to one element of the host tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(usize);

impl ElementId {
    /// Create a handle from a host-assigned index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The host-assigned index behind this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The structural role of an element, as far as the menu widget cares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// An anchor-like interactive element: a menu trigger.
    Trigger,
    /// A list element: the root of a menubar or popup menu.
    List,
    /// A list entry wrapping a trigger (and optionally a nested list).
    Item,
    /// Anything else.
    Other,
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// Capabilities the menu widget requires from its host.
///
/// Structure queries are read at attach time only; the tree is assumed
/// static afterwards. Effects may be called at any point during event
/// handling.
pub trait Surface {
    /// First element child of `el`, if any.
    fn first_child(&self, el: ElementId) -> Option<ElementId>;

    /// Next element sibling of `el`, if any.
    fn next_sibling(&self, el: ElementId) -> Option<ElementId>;

    /// The structural role of `el`.
    fn kind(&self, el: ElementId) -> ElementKind;

    /// The visible text content of `el`.
    fn label(&self, el: ElementId) -> String;

    /// Bounding rectangle of `el` in host coordinates.
    fn rect(&self, el: ElementId) -> Rect;

    /// Give `el` true input focus.
    fn focus(&mut self, el: ElementId);

    /// Mark or unmark `el` as the sequential-navigation tab stop
    /// (the roving focus marker).
    fn set_tab_stop(&mut self, el: ElementId, on: bool);

    /// Set the expanded accessibility indicator on a trigger.
    fn set_expanded(&mut self, el: ElementId, on: bool);

    /// Make `el` visible, positioned at `offset` relative to its parent.
    fn show_at(&mut self, el: ElementId, offset: Point);

    /// Hide `el`.
    fn hide(&mut self, el: ElementId);

    /// Synthesize a native activation of a trigger (the host runs whatever
    /// its default click behavior is, e.g. link navigation).
    fn activate(&mut self, el: ElementId);
}
