//! Construction-time validation errors.

use rove_core::ElementId;

/// Why attaching to a host tree failed.
///
/// These are raised synchronously during [`Menubar::attach`] and abort
/// the whole attachment; nothing is registered on failure. Runtime event
/// handling never raises.
///
/// [`Menubar::attach`]: crate::Menubar::attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// A menu list element has no element children.
    #[error("menu list element {0:?} has no element children")]
    NoChildren(ElementId),

    /// A list entry's first element child is missing or is not a
    /// trigger-capable (anchor-like) element.
    #[error("list entry {0:?} does not start with a trigger element")]
    BadTrigger(ElementId),
}
