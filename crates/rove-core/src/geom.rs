//! Geometry primitives: [`Point`] and [`Rect`].
//!
//! Popup placement only needs integer screen coordinates: a trigger's
//! bounding rectangle and the offset at which its submenu is shown.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two corner points.
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_size(origin: Point, width: i32, height: i32) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + width, origin.y + height),
        }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the rectangle covers no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Return the rectangle translated by `delta`.
    #[inline]
    pub fn translate(self, delta: Point) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ops() {
        let p = Point::new(2, 3);
        assert_eq!(p.shift(1, -1), Point::new(3, 2));
        assert_eq!(p + Point::new(1, 1), Point::new(3, 4));
        assert_eq!(p - Point::new(2, 3), Point::ZERO);
    }

    #[test]
    fn rect_size() {
        let r = Rect::from_size(Point::new(10, 20), 8, 2);
        assert_eq!(r.width(), 8);
        assert_eq!(r.height(), 2);
        assert!(!r.is_empty());
        assert!(Rect::from_size(Point::ZERO, 0, 5).is_empty());
    }

    #[test]
    fn rect_translate() {
        let r = Rect::from_size(Point::ZERO, 4, 4).translate(Point::new(1, 2));
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(5, 6));
    }
}
