#[cfg(test)]
mod integration_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::geometry::{Point, Rect};
    use crate::quadtree::{CAPACITY, Entry, QuadTree, Quadrant};

    fn hundred_square() -> QuadTree<usize> {
        QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0))
    }

    /// Fills a 100x100 tree with `count` random entries whose values are their insertion index
    fn random_tree(seed: u64, count: usize) -> (QuadTree<usize>, Vec<Point>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = hundred_square();
        let mut points = Vec::with_capacity(count);
        for value in 0..count {
            let point = Point::new(rng.random_range(0.0..=100.0), rng.random_range(0.0..=100.0));
            tree.insert(Entry::new(point, value));
            points.push(point);
        }
        (tree, points)
    }

    fn random_query<R: Rng>(rng: &mut R) -> (Point, Point) {
        let min_x = rng.random_range(-10.0..90.0);
        let min_y = rng.random_range(-10.0..90.0);
        let width = rng.random_range(0.0..40.0);
        let height = rng.random_range(0.0..40.0);
        (Point::new(min_x, min_y + height), Point::new(min_x + width, min_y))
    }

    fn check_structure(tree: &QuadTree<usize>) {
        match tree.children() {
            None => {
                assert!(tree.entries().len() <= CAPACITY, "leaf over capacity");
                for entry in tree.entries() {
                    assert!(tree.bounds().contains(entry.point), "entry {} outside its leaf", entry.value);
                }
            }
            Some(children) => {
                assert!(tree.entries().is_empty(), "internal node holds entries");
                let parent = tree.bounds();
                let expected = parent.quadrants();
                let mut area = 0.0;
                for (child, bounds) in children.iter().zip(expected) {
                    assert_eq!(*child.bounds(), bounds, "child bounds must be the parent's quadrant");
                    area += child.bounds().width() * child.bounds().height();
                    check_structure(child);
                }
                let parent_area = parent.width() * parent.height();
                assert!((area - parent_area).abs() <= parent_area * 1e-12, "children must cover the parent");
            }
        }
    }

    #[test]
    fn test_scenario_capacity_then_split() {
        let mut tree = hundred_square();
        for (value, v) in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0].into_iter().enumerate() {
            tree.insert(Entry::new(Point::new(v, v), value));
        }
        assert!(tree.is_leaf(), "six entries fit in the root");
        assert_eq!(tree.find(Point::new(10.0, 10.0)).len(), 6);

        tree.insert(Entry::new(Point::new(70.0, 70.0), 6));
        assert!(!tree.is_leaf(), "seventh entry splits the root");

        // With y growing upward (70, 70) sits in the NE quadrant, together with (60, 60)
        let found: Vec<usize> = tree.find(Point::new(70.0, 70.0)).iter().map(|e| e.value).collect();
        assert_eq!(found, vec![5, 6]);
        let ne = tree.child(Quadrant::NorthEast).expect("root is internal");
        assert_eq!(ne.entries().len(), 2);

        // (50, 50) lies on the center and went to NW
        let nw = tree.child(Quadrant::NorthWest).expect("root is internal");
        assert_eq!(nw.entries().len(), 1);
        assert_eq!(nw.entries()[0].point, Point::new(50.0, 50.0));
        assert_eq!(tree.find(Point::new(10.0, 10.0)).len(), 4);
    }

    #[test]
    fn test_seven_distinct_points_remain_retrievable() {
        let mut tree = QuadTree::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let points = [(1.0, 1.0), (9.0, 9.0), (2.0, 7.0), (8.0, 3.0), (4.0, 4.0), (6.0, 6.0), (3.0, 9.0)];
        for (value, &(x, y)) in points.iter().enumerate() {
            tree.insert(Entry::new(Point::new(x, y), value));
        }
        assert!(!tree.is_leaf(), "seventh point splits the root");
        for (value, &(x, y)) in points.iter().enumerate() {
            let found = tree.find(Point::new(x, y));
            assert!(found.iter().any(|e| e.value == value), "point {value} should be found");
        }
    }

    #[test]
    fn test_containment_property() {
        for seed in 0..8 {
            let (tree, points) = random_tree(seed, 500);
            for (value, point) in points.iter().enumerate() {
                let found = tree.find(*point);
                assert!(
                    found.iter().any(|e| e.value == value && e.point == *point),
                    "seed {seed}: entry {value} at {point} not found"
                );
            }
        }
    }

    #[test]
    fn test_structure_properties() {
        for seed in 0..8 {
            let (tree, _) = random_tree(seed, 1000);
            assert_eq!(tree.len(), 1000);
            assert_eq!(tree.iter().count(), 1000);
            check_structure(&tree);
        }
    }

    #[test]
    fn test_range_query_sound_and_complete() {
        let mut rng = StdRng::seed_from_u64(42);
        for seed in 0..4 {
            let (tree, points) = random_tree(seed, 800);
            for _ in 0..100 {
                let (top_left, bottom_right) = random_query(&mut rng);
                let query = Rect::new(top_left, bottom_right);
                let found = tree.find_in_box(top_left, bottom_right);

                for entry in &found {
                    assert!(query.contains(entry.point), "seed {seed}: {} is outside {query}", entry.point);
                }

                let mut found_values: Vec<usize> = found.iter().map(|e| e.value).collect();
                found_values.sort_unstable();
                let expected: Vec<usize> = (0..points.len()).filter(|&i| query.contains(points[i])).collect();
                assert_eq!(found_values, expected, "seed {seed}: query {query}");
            }
        }
    }

    #[test]
    fn test_out_of_bounds_queries_are_empty() {
        let (tree, _) = random_tree(7, 200);
        assert!(tree.find(Point::new(100.5, 50.0)).is_empty());
        assert!(tree.find(Point::new(50.0, -0.5)).is_empty());
        let found = tree
            .try_find_in_box(Point::new(101.0, 300.0), Point::new(200.0, 101.0))
            .expect("missing the tree is not an error");
        assert!(found.is_empty(), "query outside the tree finds nothing");
    }

    #[test]
    fn test_grid_points_on_boundaries() {
        // Points on every quadrant edge down several levels
        let mut tree = hundred_square();
        let mut value = 0;
        for i in 0..=16_u32 {
            for j in 0..=16_u32 {
                tree.insert(Entry::new(Point::new(f64::from(i) * 6.25, f64::from(j) * 6.25), value));
                value += 1;
            }
        }
        assert_eq!(tree.len(), 17 * 17);
        check_structure(&tree);

        let all = tree.find_in_box(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
        assert_eq!(all.len(), 17 * 17, "boundary entries are not duplicated");
        for entry in &tree {
            assert!(
                tree.find(entry.point).iter().any(|e| e.value == entry.value),
                "boundary entry {} must resolve by find",
                entry.value
            );
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let (tree, _) = random_tree(3, 50);
        let mut copy = tree.clone();
        copy.insert(Entry::new(Point::new(50.0, 50.0), 999));
        assert_eq!(tree.len(), 50);
        assert_eq!(copy.len(), 51);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_keeps_shape() {
        let (tree, points) = random_tree(11, 100);
        let json = serde_json::to_string(&tree).expect("serialize tree");
        let restored: QuadTree<usize> = serde_json::from_str(&json).expect("deserialize tree");

        assert_eq!(restored.len(), tree.len());
        assert_eq!(restored.depth(), tree.depth());
        assert_eq!(restored.leaf_count(), tree.leaf_count());
        for point in points {
            assert_eq!(restored.find(point), tree.find(point));
        }
    }
}
