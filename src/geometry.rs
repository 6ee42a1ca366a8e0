//! Points and axis-aligned rectangles.
//!
//! Rectangles are described by their top-left and bottom-right corners with y
//! growing upward, so `top_left.y >= bottom_right.y`. Every containment test
//! uses closed intervals: a point lying on an edge is inside.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing upward
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by its top-left and bottom-right corners
///
/// The corners are taken as given. A rectangle with `top_left.x > bottom_right.x`
/// or `top_left.y < bottom_right.y` contains no point and overlaps nothing
/// sensible; callers are expected to pass well-formed corners.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Corner with the smaller x and the larger y
    pub top_left: Point,
    /// Corner with the larger x and the smaller y
    pub bottom_right: Point,
}

impl Rect {
    /// Creates a rectangle from its two corners
    #[must_use]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    /// Returns true if `point` lies inside or on the edge of the rectangle
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.bottom_right.y
            && point.y <= self.top_left.y
    }

    /// Returns true if the two rectangles share at least one point
    ///
    /// Touching edges count as overlap.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.top_left.x <= other.bottom_right.x
            && self.top_left.y >= other.bottom_right.y
            && self.bottom_right.x >= other.top_left.x
            && self.bottom_right.y <= other.top_left.y
    }

    /// Width along the x axis
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Height along the y axis
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    /// Midpoint of both axes
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }

    /// Splits the rectangle at its center into NW, NE, SW, SE quadrants
    #[must_use]
    pub fn quadrants(&self) -> [Self; 4] {
        let mid = self.center();
        let tl = self.top_left;
        let br = self.bottom_right;
        [
            Self::new(tl, mid),
            Self::new(Point::new(mid.x, tl.y), Point::new(br.x, mid.y)),
            Self::new(Point::new(tl.x, mid.y), Point::new(mid.x, br.y)),
            Self::new(mid, br),
        ]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.top_left, self.bottom_right)
    }
}
