use std::cmp::Ordering;

use crate::error::{violated, NodeError, NodeResult};
use crate::node::Node;

/// What [`search`] found and how far it walked to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The node holding the searched value, if there is one.
    pub node: Option<Node>,
    /// How many nodes were compared against the searched value. The root counts as `1` so a
    /// search starting from no root has a depth of `0`.
    pub depth: usize,
}

impl SearchResult {
    /// Whether the searched value was found.
    pub fn is_found(&self) -> bool {
        self.node.is_some()
    }
}

/// Walks down from `root` looking for a node holding `value`. Nodes holding less than `value`
/// send the walk left and nodes holding more send it right, matching where
/// [`Node::insert`] puts values.
///
/// Not finding `value` isn't an error, the result just has no node in it.
///
/// ## Errors
///
/// [`NodeError::Disposed`] if the walk reaches a removed node. That can only happen if `root`
/// itself has been removed.
///
/// # Examples
///
/// ```
/// use linked_bst::{search, Node};
///
/// let root = Node::new(50);
/// root.insert(&Node::new(30)).unwrap();
///
/// let found = search(Some(&root), 30).unwrap();
/// assert_eq!(found.node, root.right());
/// assert_eq!(found.depth, 2);
///
/// let missing = search(Some(&root), 999).unwrap();
/// assert!(!missing.is_found());
/// assert_eq!(missing.depth, 1);
///
/// assert_eq!(search(None, 30).unwrap().depth, 0);
/// ```
pub fn search(root: Option<&Node>, value: i32) -> NodeResult<SearchResult> {
    let mut depth = 0;
    let mut current = root.cloned();
    while let Some(node) = current {
        depth += 1;
        let node_value = node.value().ok_or_else(|| violated(NodeError::Disposed))?;
        current = match node_value.cmp(&value) {
            Ordering::Equal => {
                return Ok(SearchResult {
                    node: Some(node),
                    depth,
                })
            }
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }

    Ok(SearchResult { node: None, depth })
}
