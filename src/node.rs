//! The [`Node`] handle and the operations that change the shape of a tree.
//!
//! A `Node` is a cheap, clonable handle. Cloning it gives another handle to the _same_ node and
//! two handles compare equal only when they point at the same node.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Node;
//!
//! let root = Node::new(5);
//! let child = Node::new(9);
//! root.insert(&child).unwrap();
//!
//! // 9 > 5 so it lands on the left.
//! assert_eq!(root.left(), Some(child.clone()));
//! assert_eq!(child.parent(), Some(root.clone()));
//!
//! // Changing a value never moves a node.
//! child.set_value(1).unwrap();
//! assert_eq!(root.left().and_then(|n| n.value()), Some(1));
//!
//! // Removing it clears the root's link and the child itself.
//! assert_eq!(child.remove(), 1);
//! assert_eq!(root.left(), None);
//! assert_eq!(child.value(), None);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{instrument, trace};

use crate::error::{violated, NodeError, NodeResult};

/// A handle to one node of a parent-linked tree. See the [crate docs][crate] for the ordering
/// rules.
pub struct Node(Rc<RefCell<Inner>>);

struct Inner {
    /// `None` once the node has been removed.
    value: Option<i32>,
    left: Option<Node>,
    right: Option<Node>,
    parent: Weak<RefCell<Inner>>,
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Nodes are compared by identity, not by value.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    // The parent is left out, printing it would walk straight back down into `self`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Node")
            .field("value", &inner.value)
            .field("left", &inner.left)
            .field("right", &inner.right)
            .finish()
    }
}

impl Drop for Inner {
    // Dropping child by child off a stack keeps a long chain from blowing the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Node> = self
            .left
            .take()
            .into_iter()
            .chain(self.right.take())
            .collect();
        while let Some(Node(shared)) = pending.pop() {
            // A child someone else still holds keeps its own subtree alive.
            if let Ok(cell) = Rc::try_unwrap(shared) {
                let mut inner = cell.into_inner();
                pending.extend(inner.left.take());
                pending.extend(inner.right.take());
            }
        }
    }
}

impl Node {
    /// Creates a detached node holding `value`.
    pub fn new(value: i32) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value: Some(value),
            left: None,
            right: None,
            parent: Weak::new(),
        })))
    }

    /// The stored value, or `None` if this node has been removed.
    pub fn value(&self) -> Option<i32> {
        self.0.borrow().value
    }

    /// The left child. Holds values greater than this node's.
    pub fn left(&self) -> Option<Node> {
        self.0.borrow().left.clone()
    }

    /// The right child. Holds values less than or equal to this node's.
    pub fn right(&self) -> Option<Node> {
        self.0.borrow().right.clone()
    }

    /// The parent of this node, if it has one that is still alive.
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Whether this node has no parent. Removed nodes are roots too.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let inner = self.0.borrow();
        inner.left.is_none() && inner.right.is_none()
    }

    /// Whether this node has been removed.
    pub fn is_disposed(&self) -> bool {
        self.value().is_none()
    }

    /// Whether the two handles point at the same node.
    pub fn ptr_eq(this: &Node, other: &Node) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Inserts `node` somewhere beneath `self`. Values greater than a node's value go to its left,
    /// everything else (including equal values) goes to its right. The walk continues until it
    /// finds an empty slot and `node` is attached there.
    ///
    /// `node` must be freshly made: no parent, no children, and not removed.
    ///
    /// ## Errors
    ///
    /// - [`NodeError::SelfInsert`] if `node` is `self`.
    /// - [`NodeError::Disposed`] if `node` or `self` has been removed.
    /// - [`NodeError::Attached`] if `node` already has a parent or children.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Node, NodeError};
    ///
    /// let root = Node::new(2);
    /// let one = Node::new(1);
    /// root.insert(&one).unwrap();
    /// assert_eq!(root.right(), Some(one.clone()));
    ///
    /// // It's already in the tree.
    /// assert_eq!(root.insert(&one), Err(NodeError::Attached));
    /// ```
    pub fn insert(&self, node: &Node) -> NodeResult<()> {
        if Self::ptr_eq(self, node) {
            return Err(violated(NodeError::SelfInsert));
        }

        let value = {
            let new = node.0.borrow();
            let value = new.value.ok_or_else(|| violated(NodeError::Disposed))?;
            if new.parent.upgrade().is_some() || new.left.is_some() || new.right.is_some() {
                return Err(violated(NodeError::Attached));
            }
            value
        };

        let mut parent = self.clone();
        let mut depth = 1;
        loop {
            let next = {
                let mut inner = parent.0.borrow_mut();
                let parent_value = inner.value.ok_or_else(|| violated(NodeError::Disposed))?;
                let slot = if value > parent_value {
                    &mut inner.left
                } else {
                    &mut inner.right
                };
                match slot.as_ref() {
                    Some(child) => child.clone(),
                    None => {
                        *slot = Some(node.clone());
                        break;
                    }
                }
            };
            parent = next;
            depth += 1;
        }

        node.0.borrow_mut().parent = Rc::downgrade(&parent.0);
        trace!(value, depth = depth + 1, "attached node");
        Ok(())
    }

    /// Removes this node _and its entire subtree_. The parent's link to this node is cleared
    /// first, then the right subtree, the left subtree, and finally this node are invalidated. An
    /// invalidated node has no value and no links.
    ///
    /// Returns how many nodes were invalidated. Removing an already removed node does nothing and
    /// returns `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let root = Node::new(5);
    /// let three = Node::new(3);
    /// root.insert(&three).unwrap();
    /// root.insert(&Node::new(1)).unwrap();
    ///
    /// assert_eq!(three.remove(), 2);
    /// assert!(root.is_leaf());
    /// assert_eq!(three.remove(), 0);
    /// ```
    #[instrument(level = "trace", skip(self), fields(value = ?self.value()))]
    pub fn remove(&self) -> usize {
        self.detach();

        // Post-order with right subtrees ahead of left ones. `true` means the node's children
        // have already been pushed.
        let mut removed = 0;
        let mut pending = vec![(self.clone(), false)];
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let mut inner = node.0.borrow_mut();
                inner.left = None;
                inner.right = None;
                inner.parent = Weak::new();
                if inner.value.take().is_some() {
                    removed += 1;
                }
                continue;
            }

            let (left, right) = {
                let inner = node.0.borrow();
                (inner.left.clone(), inner.right.clone())
            };
            pending.push((node, true));
            pending.extend(left.map(|n| (n, false)));
            pending.extend(right.map(|n| (n, false)));
        }

        trace!(removed, "removed subtree");
        removed
    }

    /// Replaces this node's value without moving it. The ordering rules may not hold around this
    /// node afterwards.
    ///
    /// ## Errors
    ///
    /// [`NodeError::Disposed`] if this node has been removed.
    #[instrument(level = "trace", skip(self))]
    pub fn set_value(&self, value: i32) -> NodeResult<()> {
        match self.0.borrow_mut().value.as_mut() {
            Some(current) => {
                *current = value;
                Ok(())
            }
            None => Err(violated(NodeError::Disposed)),
        }
    }

    /// Clears whichever of the parent's child links points at this node.
    fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        let mut links = parent.0.borrow_mut();
        if links.left.as_ref().is_some_and(|left| Self::ptr_eq(left, self)) {
            links.left = None;
        } else if links.right.as_ref().is_some_and(|right| Self::ptr_eq(right, self)) {
            links.right = None;
        }
    }
}
