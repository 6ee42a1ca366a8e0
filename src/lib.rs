//! # qtree - Point-Region Quadtree
//!
//! A Rust library providing a point-region quadtree over a fixed 2D rectangle,
//! for storing point-tagged values and finding them again by location.
//!
//! ## Features
//!
//! - **Fixed Domain**: The root rectangle is chosen at construction and never grows
//! - **Automatic Subdivision**: A leaf splits into four quadrants once it would hold more than [`CAPACITY`] entries
//! - **Leaf Lookup**: [`QuadTree::find`] returns the whole leaf containing a point
//! - **Range Queries**: [`QuadTree::find_in_box`] returns every entry inside an axis-aligned rectangle
//! - **Generic Payloads**: Any value type can ride along with a point
//!
//! ## Quick Start
//!
//! ```rust
//! use qtree::prelude::*;
//!
//! // y grows upward: the top-left corner has the larger y
//! let mut tree = QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
//!
//! for i in 1..=7 {
//!     let v = f64::from(i) * 10.0;
//!     tree.insert(Entry::new(Point::new(v, v), i));
//! }
//!
//! // The seventh entry pushed the root over capacity
//! assert!(!tree.is_leaf());
//!
//! // Everything inside (0, 35) .. (35, 0)
//! let found = tree.find_in_box(Point::new(0.0, 35.0), Point::new(35.0, 0.0));
//! let values: Vec<i32> = found.iter().map(|entry| entry.value).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
//!
//! ## Errors
//!
//! Inserting a point outside the tree is a contract violation. [`QuadTree::insert`]
//! panics on it (the release profile aborts on panic), while
//! [`QuadTree::try_insert`] hands back a [`QuadTreeError`] instead. Queries that
//! miss the tree are not errors; they return nothing and log at `info` level
//! through `tracing`.

pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;

pub use error::QuadTreeError;
pub use geometry::{Point, Rect};
pub use quadtree::{CAPACITY, Entry, Iter, QuadTree, Quadrant};

#[cfg(test)]
mod integration_test;
