//! **rove-core** — Foundational types for the *rove* menu widget.
//!
//! This crate provides everything the widget crate builds on: geometry
//! primitives for popup placement, the input events a host delivers to
//! menu elements, the [`Surface`] capability trait that abstracts the
//! rendering host (with a deterministic in-memory implementation for
//! tests and demos), and a keyed timer queue for deferred close checks.

pub mod events;
pub mod geom;
pub mod surface;
pub mod timer;

pub use events::{Event, Key};
pub use geom::{Point, Rect};
pub use surface::{ElementId, ElementKind, MemorySurface, Surface};
pub use timer::Timers;
