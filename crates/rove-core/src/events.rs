//! Input events: [`Event`] and [`Key`].
//!
//! The host dispatches events per element; the widget routes them to the
//! leaf or container that registered for that element.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key, as delivered with [`Event::KeyDown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Tab,
    Home,
    End,
    PageUp,
    PageDown,
    /// A character key.
    Char(char),
}

impl Key {
    /// The printable character carried by this key, if any.
    ///
    /// Used for first-character search: whitespace and control characters
    /// do not participate.
    #[inline]
    pub fn printable_char(self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_whitespace() && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// An input event delivered to a single element of the menu tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A key was pressed while the element had input focus.
    KeyDown { key: Key },
    /// The element was clicked.
    Click,
    /// The element received input focus.
    Focus,
    /// The element lost input focus.
    Blur,
    /// The pointer entered the element.
    MouseOver,
    /// The pointer left the element.
    MouseOut,
}

impl Event {
    /// Convenience: create a `KeyDown`.
    #[inline]
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_chars() {
        assert_eq!(Key::Char('b').printable_char(), Some('b'));
        assert_eq!(Key::Char('Z').printable_char(), Some('Z'));
        assert_eq!(Key::Char(' ').printable_char(), None);
        assert_eq!(Key::Char('\t').printable_char(), None);
        assert_eq!(Key::Enter.printable_char(), None);
    }
}
