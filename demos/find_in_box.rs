//! Find entries inside a query rectangle.
use qtree::prelude::*;

fn main() {
    let mut tree = QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
    for i in 0..20_u32 {
        let v = f64::from(i) * 5.0;
        tree.insert(Entry::new(Point::new(v, 100.0 - v), i));
    }

    // Query rectangle (20, 80) .. (40, 60) covers entries 4 through 8
    let found = tree.find_in_box(Point::new(20.0, 80.0), Point::new(40.0, 60.0));
    let values: Vec<u32> = found.iter().map(|e| e.value).collect();
    println!("Inside box: {values:?}");
    assert_eq!(values, vec![4, 5, 6, 7, 8], "Expected entries 4..=8");

    match tree.try_find_in_box(Point::new(200.0, 300.0), Point::new(300.0, 200.0)) {
        Ok(found) => println!("Far away box: {} entries", found.len()),
        Err(err) => eprintln!("corrupted tree: {err}"),
    }
}
