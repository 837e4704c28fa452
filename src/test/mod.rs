//! Helpers shared by the unit tests and quicktests.


pub(crate) use logging::init_test_setup;

use crate::Node;

/// Every node reachable from `root`, root first.
pub(crate) fn nodes(root: &Node) -> Vec<Node> {
    let mut found = Vec::new();
    let mut pending = vec![root.clone()];
    while let Some(node) = pending.pop() {
        pending.extend(node.right());
        pending.extend(node.left());
        found.push(node);
    }
    found
}

/// Asserts every child below `root` points back at its parent and is only one of its parent's
/// children.
pub(crate) fn assert_links(root: &Node) {
    for node in nodes(root) {
        if let (Some(left), Some(right)) = (node.left(), node.right()) {
            assert_ne!(left, right);
        }
        for child in node.left().into_iter().chain(node.right()) {
            assert_eq!(child.parent(), Some(node.clone()));
        }
    }
}

/// Asserts every left subtree only holds values greater than its ancestor and every right
/// subtree only holds values less than or equal to it.
pub(crate) fn assert_ordered(root: &Node) {
    // Each entry carries the exclusive lower bound and inclusive upper bound from its ancestors.
    let mut pending = vec![(root.clone(), None::<i32>, None::<i32>)];
    while let Some((node, greater_than, at_most)) = pending.pop() {
        let value = node.value().unwrap();
        if let Some(low) = greater_than {
            assert!(value > low, "{} should be greater than {}", value, low);
        }
        if let Some(high) = at_most {
            assert!(value <= high, "{} should be at most {}", value, high);
        }

        if let Some(left) = node.left() {
            pending.push((left, Some(value), at_most));
        }
        if let Some(right) = node.right() {
            pending.push((right, greater_than, Some(value)));
        }
    }
}
