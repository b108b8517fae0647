//! Layout geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle, relative to the parent container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge. Widened so that edges past `i32::MAX` stay exact.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Returns true if neither dimension is negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// The same size, moved to the origin.
    ///
    /// Children are laid out relative to their container, so a container's
    /// own bounds are checked at the origin.
    pub fn at_origin(&self) -> Self {
        Self::new(0, 0, self.width, self.height)
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the interiors of the two rectangles overlap.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({},{})", self.width, self.height, self.x, self.y)
    }
}
