//! Pixel geometry for the diagram surface
//!
//! All coordinates are integer pixels with the origin at the top-left corner
//! of the canvas, x growing right and y growing down.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its top-left corner and a size
    pub const fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Midpoint of the left edge, where incoming connectors attach
    pub const fn left_mid(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2)
    }

    /// Midpoint of the right edge, where outgoing connectors attach
    pub const fn right_mid(&self) -> Point {
        Point::new(self.right(), self.y + self.height / 2)
    }

    /// Check if a point falls within this rectangle, edges included
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(15, 25)));
        assert!(!rect.contains(Point::new(16, 25)));
        assert!(!rect.contains(Point::new(9, 20)));
    }

    #[test]
    fn connector_anchors_sit_on_vertical_middle() {
        let rect = Rect::new(50, 50, 140, 60);
        assert_eq!(rect.right_mid(), Point::new(190, 80));
        assert_eq!(rect.left_mid(), Point::new(50, 80));
    }
}
