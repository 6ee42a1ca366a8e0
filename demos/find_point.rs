//! Find the leaf holding a point.
use qtree::prelude::*;

fn main() {
    let mut tree = QuadTree::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
    tree.insert(Entry::new(Point::new(1.0, 1.0), "harbor"));
    tree.insert(Entry::new(Point::new(2.0, 3.0), "market"));
    tree.insert(Entry::new(Point::new(8.0, 9.0), "lighthouse"));

    // The root is still one leaf, so any point inside returns all three entries
    let found = tree.find(Point::new(1.0, 1.0));
    println!("Leaf containing (1, 1): {:?}", found.iter().map(|e| e.value).collect::<Vec<_>>());
    assert_eq!(found.len(), 3, "Expected the whole root leaf");

    let outside = tree.find(Point::new(11.0, 5.0));
    println!("Leaf containing (11, 5): {} entries", outside.len());
    assert!(outside.is_empty(), "Points outside the tree find nothing");
}
