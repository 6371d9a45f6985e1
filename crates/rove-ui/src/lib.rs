//! **rove-ui** — An accessible, keyboard-navigable menubar widget.
//!
//! A horizontal menubar whose items can each own a nested, recursively
//! nestable popup submenu. The widget coordinates keyboard input, pointer
//! hover, input focus, and timed auto-close across the whole tree while
//! maintaining the accessibility contract: one roving tab stop per
//! container, first-character search, and expanded/collapsed indicators
//! on triggers.
//!
//! Attach it to any host implementing [`rove_core::Surface`]:
//!
//! ```
//! use rove_core::{Event, Key, MemorySurface};
//! use rove_ui::Menubar;
//!
//! let mut s = MemorySurface::new();
//! let root = s.list(None);
//! let file = s.entry(root, "File");
//! let menu = s.submenu(file);
//! s.entry(menu, "Open");
//!
//! let mut bar = Menubar::attach(s, root).unwrap();
//! bar.deliver(file, Event::key(Key::ArrowDown));
//! ```
//!
//! The host forwards keydown, click, focus, blur, mouseover and mouseout
//! events per element through [`Menubar::deliver`], and calls
//! [`Menubar::tick`] when a deferred close check comes due (see
//! [`Menubar::next_deadline`]). Dropping the [`Menubar`] tears the whole
//! tree down at once.

mod attach;
mod error;
mod focus;
mod input;
mod popup;
mod tree;

pub use error::AttachError;
pub use tree::{MenuRef, Menubar, NodeId, Outcome, PopupId};
