use linked_bst::{search, Node};

use std::collections::HashSet;

/// Builds a tree by inserting each of `xs` beneath a root holding `root`.
fn build(root: i8, xs: &[i8]) -> Node {
    let tree = Node::new(root.into());
    for x in xs {
        tree.insert(&Node::new((*x).into())).unwrap();
    }
    tree
}

fn contains(tree: &Node, x: i8) -> bool {
    search(Some(tree), x.into()).unwrap().is_found()
}

#[quickcheck]
fn contains_all(xs: Vec<i8>) -> bool {
    let tree = build(0, &xs);

    xs.iter().all(|x| {
        let found = search(Some(&tree), (*x).into()).unwrap();
        found.node.and_then(|n| n.value()) == Some((*x).into()) && found.depth <= xs.len() + 1
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(0, &xs);
    let mut added: HashSet<_> = xs.into_iter().collect();
    added.insert(0);
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !contains(&tree, *x))
}

/// Removing the node found for `cut` takes everything beneath it too, so afterwards exactly the
/// values outside that subtree are still found.
#[quickcheck]
fn removal_truncates_subtree(xs: Vec<i8>, cut: i8) -> bool {
    let tree = build(0, &xs);
    let Some(target) = search(Some(&tree), cut.into()).unwrap().node else {
        return true;
    };
    if target == tree {
        return true;
    }

    let mut doomed = Vec::new();
    let mut pending = vec![target.clone()];
    while let Some(node) = pending.pop() {
        pending.extend(node.left());
        pending.extend(node.right());
        doomed.push(node);
    }
    let doomed_values: HashSet<i32> = doomed.iter().filter_map(|n| n.value()).collect();
    let parent = target.parent().unwrap();

    let removed = target.remove();

    removed == doomed.len()
        && doomed.iter().all(|n| n.value().is_none() && n.parent().is_none())
        && parent.left() != Some(target.clone())
        && parent.right() != Some(target)
        && xs.iter().all(|x| {
            let x = i32::from(*x);
            // Duplicates of a removed value may survive above the removed subtree.
            doomed_values.contains(&x) || search(Some(&tree), x).unwrap().is_found()
        })
}

#[quickcheck]
fn set_value_never_moves_nodes(xs: Vec<i8>, new_value: i8) -> bool {
    let tree = build(0, &xs);
    let Some(node) = tree.left().or_else(|| tree.right()) else {
        return true;
    };
    let (left, right) = (node.left(), node.right());

    node.set_value(new_value.into()).unwrap();

    node.parent() == Some(tree) && node.left() == left && node.right() == right
}
