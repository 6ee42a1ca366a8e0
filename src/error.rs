//! Quadtree error types.

use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Errors raised when a tree operation meets a broken contract or a broken invariant
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// The inserted point lies outside the tree's bounds
    #[error("point {point} is out of bounds {bounds}")]
    OutOfBounds {
        /// Offending point
        point: Point,
        /// Bounds of the node that rejected it
        bounds: Rect,
    },

    /// A leaf holds more entries than a leaf may hold
    #[error("leaf holds {count} entries, capacity is {capacity}")]
    CapacityExceeded {
        /// Number of entries found
        count: usize,
        /// Leaf capacity
        capacity: usize,
    },

    /// A full leaf cannot be split in a way that separates its entries
    #[error("cannot split {bounds} to make room for point {point}")]
    Unsplittable {
        /// Point that was being inserted
        point: Point,
        /// Bounds of the full leaf
        bounds: Rect,
    },
}
