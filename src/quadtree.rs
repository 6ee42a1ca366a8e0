//! Point-region quadtree over a fixed rectangular domain.
//!
//! Every node is either a leaf holding up to [`CAPACITY`] entries or an internal
//! node owning exactly four children, one per quadrant. A leaf that is full when
//! another entry arrives is split at the midpoint of both axes and its entries are
//! pushed down into the quadrants. Nodes never merge back.
//!
//! Containment is closed on both axes, so a point lying on a shared quadrant edge
//! is inside several children. Children are always tested in the order
//! NW, NE, SW, SE and the first match wins, both when storing and when searching.

use std::{array, fmt, mem, slice};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::QuadTreeError;
use crate::geometry::{Point, Rect};

/// Maximum number of entries a leaf holds before it is subdivided
pub const CAPACITY: usize = 6;

/// A point tagged with an arbitrary payload
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<T> {
    /// Location of the entry
    pub point: Point,
    /// Payload carried with the point
    pub value: T,
}

impl<T> Entry<T> {
    /// Creates an entry
    pub const fn new(point: Point, value: T) -> Self {
        Self { point, value }
    }
}

/// One of the four children of an internal node
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "a rectangle has exactly four quadrants")]
pub enum Quadrant {
    /// Smaller x, larger y
    NorthWest,
    /// Larger x, larger y
    NorthEast,
    /// Smaller x, smaller y
    SouthWest,
    /// Larger x, smaller y
    SouthEast,
}

impl Quadrant {
    /// All quadrants in the order children are tested
    pub const ALL: [Self; 4] = [Self::NorthWest, Self::NorthEast, Self::SouthWest, Self::SouthEast];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
enum Node<T> {
    Leaf(Vec<Entry<T>>),
    Internal(Box<[QuadTree<T>; 4]>),
}

/// Quadtree storing point entries inside fixed bounds
///
/// # Examples
/// ```
/// use qtree::{Entry, Point, QuadTree};
///
/// let mut tree = QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
/// tree.insert(Entry::new(Point::new(10.0, 10.0), "a"));
/// tree.insert(Entry::new(Point::new(90.0, 90.0), "b"));
///
/// let found = tree.find_in_box(Point::new(0.0, 50.0), Point::new(50.0, 0.0));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].value, "a");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    bounds: Rect,
    node: Node<T>,
}

impl<T> QuadTree<T> {
    /// Creates an empty leaf covering the rectangle between the two corners
    ///
    /// The corners are not validated. `top_left` must have the smaller x and the
    /// larger y.
    #[must_use]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self::with_bounds(Rect::new(top_left, bottom_right))
    }

    /// Creates an empty leaf covering `bounds`
    #[must_use]
    pub const fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            node: Node::Leaf(Vec::new()),
        }
    }

    /// Inserts an entry, aborting on failure
    ///
    /// # Panics
    /// Panics if the entry lies outside the tree's bounds or if the tree's
    /// structure is found to be corrupted. See [`QuadTree::try_insert`] for the
    /// non-panicking form.
    pub fn insert(&mut self, entry: Entry<T>) {
        if let Err(err) = self.try_insert(entry) {
            error!(%err, bounds = %self.bounds, "quadtree insert failed");
            panic!("quadtree insert failed: {err}");
        }
    }

    /// Inserts an entry, reporting contract violations as errors
    ///
    /// # Errors
    /// - [`QuadTreeError::OutOfBounds`] if the entry's point is outside the bounds.
    /// - [`QuadTreeError::CapacityExceeded`] if a leaf ends up over capacity.
    /// - [`QuadTreeError::Unsplittable`] if the entry would join more than
    ///   [`CAPACITY`] entries that no split can tell apart.
    ///
    /// `Unsplittable` leaves the tree unchanged. After `CapacityExceeded` the
    /// tree should not be trusted.
    pub fn try_insert(&mut self, entry: Entry<T>) -> Result<(), QuadTreeError> {
        self.insert_at(entry)
    }

    fn insert_at(&mut self, entry: Entry<T>) -> Result<(), QuadTreeError> {
        let point = entry.point;
        if !self.bounds.contains(point) {
            return Err(QuadTreeError::OutOfBounds {
                point,
                bounds: self.bounds,
            });
        }

        if matches!(&self.node, Node::Leaf(entries) if entries.len() >= CAPACITY) {
            self.subdivide(point)?;
        }

        match &mut self.node {
            Node::Leaf(entries) => {
                entries.push(entry);
                Ok(())
            }
            Node::Internal(children) => {
                let Some(child) = children.iter_mut().find(|child| child.bounds.contains(point)) else {
                    return Err(QuadTreeError::OutOfBounds {
                        point,
                        bounds: self.bounds,
                    });
                };
                child.insert_at(entry)?;

                match children.iter().map(|child| child.entries().len()).find(|&count| count > CAPACITY) {
                    Some(count) => Err(QuadTreeError::CapacityExceeded {
                        count,
                        capacity: CAPACITY,
                    }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Turns a leaf into an internal node with four fresh leaves
    ///
    /// `incoming` is the point about to be inserted. The split is refused when it
    /// cannot separate anything: every held entry sits at `incoming`, or the
    /// bounds are so small that a quadrant rounds back to the whole rectangle.
    /// Entries are routed before anything moves, so a failure leaves the leaf as
    /// it was.
    fn subdivide(&mut self, incoming: Point) -> Result<(), QuadTreeError> {
        let bounds = self.bounds;
        let quadrants = bounds.quadrants();
        let Node::Leaf(entries) = &mut self.node else {
            return Ok(());
        };

        if entries.iter().all(|entry| entry.point == incoming) || quadrants.contains(&bounds) {
            return Err(QuadTreeError::Unsplittable {
                point: incoming,
                bounds,
            });
        }

        let mut targets = Vec::with_capacity(entries.len());
        for entry in entries.iter() {
            let index = quadrants
                .iter()
                .position(|quadrant| quadrant.contains(entry.point))
                .ok_or(QuadTreeError::OutOfBounds {
                    point: entry.point,
                    bounds,
                })?;
            targets.push(index);
        }

        let redistributed = entries.len();
        let mut buckets: [Vec<Entry<T>>; 4] = Default::default();
        for (entry, index) in mem::take(entries).into_iter().zip(targets) {
            buckets[index].push(entry);
        }

        let children = array::from_fn(|i| Self {
            bounds: quadrants[i],
            node: Node::Leaf(mem::take(&mut buckets[i])),
        });
        self.node = Node::Internal(Box::new(children));

        debug!(%bounds, redistributed, "subdivided leaf");
        Ok(())
    }

    /// Returns the entries of the leaf whose bounds contain `point`
    ///
    /// Resolution stops at the leaf: every entry of that leaf is returned, not
    /// only those located exactly at `point`. A point outside the tree yields an
    /// empty slice.
    #[must_use]
    pub fn find(&self, point: Point) -> &[Entry<T>] {
        if !self.bounds.contains(point) {
            info!(%point, bounds = %self.bounds, "point not contained");
            return &[];
        }

        match &self.node {
            Node::Leaf(entries) => entries.as_slice(),
            Node::Internal(children) => match children.iter().find(|child| child.bounds.contains(point)) {
                Some(child) => child.find(point),
                None => &[],
            },
        }
    }

    /// Returns every entry located inside the query rectangle, aborting on corruption
    ///
    /// Edges of the query rectangle are inclusive. Results come in quadrant order
    /// NW, NE, SW, SE and, within a leaf, in insertion order.
    ///
    /// # Panics
    /// Panics if a leaf yields more than [`CAPACITY`] matches, which means the
    /// tree is corrupted. See [`QuadTree::try_find_in_box`].
    #[must_use]
    pub fn find_in_box(&self, top_left: Point, bottom_right: Point) -> Vec<&Entry<T>> {
        match self.try_find_in_box(top_left, bottom_right) {
            Ok(found) => found,
            Err(err) => {
                error!(%err, bounds = %self.bounds, "quadtree box query failed");
                panic!("quadtree box query failed: {err}");
            }
        }
    }

    /// Returns every entry located inside the query rectangle
    ///
    /// # Errors
    /// [`QuadTreeError::CapacityExceeded`] if a leaf yields more than
    /// [`CAPACITY`] matches. This is fatal.
    pub fn try_find_in_box(&self, top_left: Point, bottom_right: Point) -> Result<Vec<&Entry<T>>, QuadTreeError> {
        let query = Rect::new(top_left, bottom_right);
        let mut results = Vec::new();
        if !self.bounds.overlaps(&query) {
            info!(%query, bounds = %self.bounds, "query box not contained");
            return Ok(results);
        }
        self.collect_in_box(&query, &mut results)?;
        Ok(results)
    }

    fn collect_in_box<'a>(&'a self, query: &Rect, results: &mut Vec<&'a Entry<T>>) -> Result<(), QuadTreeError> {
        match &self.node {
            Node::Leaf(entries) => {
                let mut count = 0;
                for entry in entries.iter().filter(|entry| query.contains(entry.point)) {
                    count += 1;
                    if count > CAPACITY {
                        return Err(QuadTreeError::CapacityExceeded {
                            count,
                            capacity: CAPACITY,
                        });
                    }
                    results.push(entry);
                }
            }
            Node::Internal(children) => {
                for child in children.iter().filter(|child| child.bounds.overlaps(query)) {
                    child.collect_in_box(query, results)?;
                }
            }
        }
        Ok(())
    }

    /// Returns true if this node stores entries directly
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf(_))
    }

    /// Bounds of this node
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Entries stored directly in this node; always empty for an internal node
    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        match &self.node {
            Node::Leaf(entries) => entries.as_slice(),
            Node::Internal(_) => &[],
        }
    }

    /// Children in NW, NE, SW, SE order, or `None` for a leaf
    #[must_use]
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.node {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(&**children),
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|children| &children[quadrant.index()])
    }

    /// Total number of entries in this subtree
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Leaf(entries) => entries.len(),
            Node::Internal(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// Returns true if the subtree holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels below this node; 0 for a leaf
    #[must_use]
    pub fn depth(&self) -> usize {
        match &self.node {
            Node::Leaf(_) => 0,
            Node::Internal(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Number of leaves in this subtree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.node {
            Node::Leaf(_) => 1,
            Node::Internal(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Iterates over every entry, depth first in NW, NE, SW, SE order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![self],
            current: Default::default(),
        }
    }
}

#[cfg(test)]
impl<T> QuadTree<T> {
    /// Leaf holding `entries` as given, capacity unchecked
    pub(crate) fn leaf_with_entries(bounds: Rect, entries: Vec<Entry<T>>) -> Self {
        Self {
            bounds,
            node: Node::Leaf(entries),
        }
    }

    /// Internal node over `bounds` with the given children, bounds unchecked
    pub(crate) fn internal_with_children(bounds: Rect, children: [Self; 4]) -> Self {
        Self {
            bounds,
            node: Node::Internal(Box::new(children)),
        }
    }
}

impl<T> Extend<Entry<T>> for QuadTree<T> {
    /// Inserts every entry in turn
    ///
    /// Panics on the same conditions as [`QuadTree::insert`].
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`QuadTree`], created by [`QuadTree::iter`]
pub struct Iter<'a, T> {
    stack: Vec<&'a QuadTree<T>>,
    current: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                return Some(entry);
            }
            let tree = self.stack.pop()?;
            match &tree.node {
                Node::Leaf(entries) => self.current = entries.iter(),
                Node::Internal(children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current.clone(),
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.stack.len())
            .field("pending_entries", &self.current.len())
            .finish()
    }
}
