//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use qtree::prelude::*;
//! ```

pub use crate::{CAPACITY, Entry, Point, QuadTree, QuadTreeError, Quadrant, Rect};
