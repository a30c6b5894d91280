use keyed_forest::RbTree;

#[test]
fn first_insert_installs_black_root() {
    let mut tree = RbTree::new();
    tree.insert(42, 7u8).unwrap();

    assert_eq!(tree.root_key(), Some(42));
    assert!(tree.is_black(42).unwrap());
    assert!(!tree.has_parent(42).unwrap());
    assert_eq!(tree.length(), 1);
    tree.assert_invariants().unwrap();
}

#[test]
fn red_uncle_recolors_without_rotation() {
    let mut tree = RbTree::new();
    for key in [21, 15, 31] {
        tree.insert(key, 0u8).unwrap();
    }

    assert_eq!(tree.root_key(), Some(21));
    assert!(tree.is_black(21).unwrap());
    assert!(tree.is_red(15).unwrap());
    assert!(tree.is_red(31).unwrap());
    assert!(tree.left_child_is_red(21).unwrap());
    assert!(tree.right_child_is_red(21).unwrap());

    tree.insert(10, 0u8).unwrap();

    assert_eq!(tree.root_key(), Some(21));
    assert!(tree.is_black(21).unwrap());
    assert!(tree.is_black(15).unwrap());
    assert!(tree.is_black(31).unwrap());
    assert!(tree.is_red(10).unwrap());
    assert_eq!(tree.left_child_key(21).unwrap(), 15);
    assert_eq!(tree.right_child_key(21).unwrap(), 31);
    assert_eq!(tree.left_child_key(15).unwrap(), 10);
    tree.assert_invariants().unwrap();
}

#[test]
fn ascending_ladder_stays_balanced() {
    let mut tree = RbTree::new();
    for i in 0..200u128 {
        tree.insert(i, i).unwrap();
        tree.assert_invariants().unwrap();
    }

    assert_eq!(tree.length(), 200);
    assert_eq!(tree.node_count(), 200);
    assert_eq!(
        tree.in_order_keys().unwrap(),
        (0..200u128).collect::<Vec<_>>()
    );
}

#[test]
fn descending_ladder_stays_balanced() {
    let mut tree = RbTree::new();
    for i in (0..200u128).rev() {
        tree.insert(i, i).unwrap();
        tree.assert_invariants().unwrap();
    }

    assert_eq!(
        tree.in_order_keys().unwrap(),
        (0..200u128).collect::<Vec<_>>()
    );
}

#[test]
fn zigzag_inserts_stay_balanced() {
    // Alternating low/high keys exercise the inner-grandchild rotations.
    let mut tree = RbTree::new();
    let mut keys = Vec::new();
    for i in 0..50u128 {
        keys.push(i);
        keys.push(1000 - i);
    }
    for key in keys {
        tree.insert(key, 0u8).unwrap();
        tree.assert_invariants().unwrap();
    }

    let in_order = tree.in_order_keys().unwrap();
    let mut sorted = in_order.clone();
    sorted.sort_unstable();
    assert_eq!(in_order, sorted);
    assert_eq!(tree.node_count(), 100);
}

#[test]
fn duplicate_key_accumulates_values() {
    let mut tree = RbTree::new();
    tree.insert(10, 10u8).unwrap();
    tree.insert(8, 10u8).unwrap();
    tree.insert(8, 1u8).unwrap();

    assert_eq!(tree.values_at(8).unwrap(), &[10, 1]);
    assert_eq!(tree.length(), 3);
    assert!(tree.contains_key(8));
    assert_eq!(tree.node_count(), 2);
    tree.assert_invariants().unwrap();
}

#[test]
fn duplicate_insert_under_red_parent_keeps_shape() {
    let mut tree = RbTree::new();
    for key in [20, 10, 5, 30, 15, 25] {
        tree.insert(key, 0u8).unwrap();
    }
    // This sequence leaves 15 as a black node under the red node 20.
    assert!(tree.is_black(15).unwrap());
    assert!(tree.is_red(20).unwrap());
    assert_eq!(tree.root_key(), Some(10));

    tree.insert(15, 1u8).unwrap();

    assert_eq!(tree.values_at(15).unwrap(), &[0, 1]);
    assert_eq!(tree.length(), 7);
    assert_eq!(tree.node_count(), 6);
    // The append must not move or recolor anything.
    assert_eq!(tree.root_key(), Some(10));
    assert_eq!(tree.parent_key(15).unwrap(), 20);
    assert!(tree.is_black(15).unwrap());
    assert!(tree.is_red(20).unwrap());
    assert_eq!(
        tree.in_order_keys().unwrap(),
        vec![5, 10, 15, 20, 25, 30]
    );
    tree.assert_invariants().unwrap();
}

#[test]
fn repeated_inserts_keep_insertion_order() {
    let mut tree = RbTree::new();
    for v in 1..=5u8 {
        tree.insert(77, v).unwrap();
        tree.assert_invariants().unwrap();
    }

    assert_eq!(tree.values_at(77).unwrap(), &[1, 2, 3, 4, 5]);
    assert_eq!(tree.value_at(77).unwrap(), &1);
    assert_eq!(tree.length(), 5);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn mixed_duplicates_count_values_not_nodes() {
    let mut tree = RbTree::new();
    for round in 0..3u8 {
        for key in [5u128, 1, 9, 3, 7] {
            tree.insert(key, round).unwrap();
            tree.assert_invariants().unwrap();
        }
    }

    assert_eq!(tree.length(), 15);
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.in_order_keys().unwrap(), vec![1, 3, 5, 7, 9]);
    for key in [5u128, 1, 9, 3, 7] {
        assert_eq!(tree.values_at(key).unwrap(), &[0, 1, 2]);
    }
}
