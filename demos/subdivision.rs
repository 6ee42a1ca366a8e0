//! Watch a leaf split once it goes over capacity.
//!
//! Run with `RUST_LOG=qtree=debug` to see subdivisions logged.
use qtree::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
    for i in 1..=CAPACITY {
        let v = i as f64 * 10.0;
        tree.insert(Entry::new(Point::new(v, v), i));
        println!("{} entries, leaf: {}", tree.len(), tree.is_leaf());
    }

    tree.insert(Entry::new(Point::new(70.0, 70.0), 7));
    println!("{} entries, leaf: {}, depth: {}", tree.len(), tree.is_leaf(), tree.depth());

    for quadrant in Quadrant::ALL {
        if let Some(child) = tree.child(quadrant) {
            println!("{quadrant:?} {}: {} entries", child.bounds(), child.entries().len());
        }
    }

    // Out-of-bounds inserts are rejected; `insert` would panic instead
    if let Err(err) = tree.try_insert(Entry::new(Point::new(150.0, 50.0), 99)) {
        println!("rejected: {err}");
    }
}
