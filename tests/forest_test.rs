//! Tests for branch navigation, search and counting on the arena forest

use branchnet::domain::{Forest, Level, NodeId, VACANT};
use branchnet::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// One root, three great branches, two middle branches each.
fn full_tree() -> (Forest, NodeId, Vec<NodeId>, Vec<Vec<NodeId>>) {
    let mut forest = Forest::new();
    let root = forest.add_root();
    let mut large = Vec::new();
    let mut middle = Vec::new();
    for _ in 0..3 {
        let l = forest.add_child(root).unwrap();
        middle.push(vec![forest.add_child(l).unwrap(), forest.add_child(l).unwrap()]);
        large.push(l);
    }
    (forest, root, large, middle)
}

#[test]
fn given_every_node_labelled_when_counting_at_root_then_ten() {
    let (mut forest, root, _, _) = full_tree();
    let ids: Vec<NodeId> = forest.iter().map(|(id, _)| id).collect();
    for (i, id) in ids.into_iter().enumerate() {
        forest.set_label(id, &format!("elf{}", i)).unwrap();
    }
    assert_eq!(forest.count_labeled_descendants(root), 1 + 3 + 3 * 2);
}

#[test]
fn given_vacant_and_empty_labels_when_counting_then_skipped() {
    let (mut forest, _, large, middle) = full_tree();
    forest.set_label(large[0], "Elrond").unwrap();
    forest.set_label(middle[0][0], VACANT).unwrap();
    forest.set_label(middle[0][1], "").unwrap();
    assert_eq!(forest.count_labeled_descendants(large[0]), 1);
}

#[test]
fn given_levels_when_resolving_top_ancestor_then_one_hop_at_most() {
    let (forest, root, large, middle) = full_tree();
    assert_eq!(forest.top_level_ancestor(root), None);
    assert_eq!(forest.top_level_ancestor(large[1]), Some(large[1]));
    assert_eq!(forest.top_level_ancestor(middle[1][0]), Some(large[1]));
}

#[test]
fn given_duplicate_labels_when_finding_then_first_in_preorder_wins() {
    let (mut forest, root, large, middle) = full_tree();
    forest.set_label(middle[0][1], "Twin").unwrap();
    forest.set_label(large[1], "Twin").unwrap();
    assert_eq!(forest.find_by_label(root, "Twin"), Some(middle[0][1]));
}

#[test]
fn given_parent_labelled_like_child_when_finding_then_parent_checked_first() {
    let (mut forest, root, large, middle) = full_tree();
    forest.set_label(large[2], "Same").unwrap();
    forest.set_label(middle[2][0], "Same").unwrap();
    assert_eq!(forest.find_by_label(root, "Same"), Some(large[2]));
}

#[test]
fn given_case_difference_when_finding_then_no_match() {
    let (mut forest, root, large, _) = full_tree();
    forest.set_label(large[0], "Elrond").unwrap();
    assert_eq!(forest.find_by_label(root, "elrond"), None);
}

#[test]
fn given_node_when_inspecting_level_then_derived_from_depth() {
    let (forest, root, large, middle) = full_tree();
    assert_eq!(forest.level_of(root), Some(Level::Root));
    assert_eq!(forest.level_of(large[0]), Some(Level::Large));
    assert_eq!(forest.level_of(middle[0][0]), Some(Level::Middle));
    assert_eq!(forest.tree_depth(root), 3);
    assert_eq!(forest.len(), 10);
}

#[test]
fn given_node_when_probing_children_then_out_of_range_is_none() {
    let (forest, _, large, middle) = full_tree();
    assert_eq!(forest.child_count(large[0]), 2);
    assert_eq!(forest.child_at(large[0], 1), Some(middle[0][1]));
    assert_eq!(forest.child_at(large[0], 2), None);
    assert_eq!(forest.child_count(middle[0][0]), 0);
    assert_eq!(forest.child_at(middle[0][0], 0), None);
}

#[test]
fn given_unset_label_when_reading_then_none() {
    let (forest, root, _, _) = full_tree();
    assert_eq!(forest.label(root), None);
    assert!(!forest.node(root).unwrap().is_occupied());
}
