//! This crate exposes a binary tree of integers whose nodes know their parent as well as their
//! children.
//!
//! ## Parent-linked tree
//!
//! Each [`Node`] stores an `i32` and holds up to two children and a link back up to its parent.
//! Children are owned by their parent; the parent link is weak and never keeps anything alive.
//! The most important invariants are:
//!
//! 1. For every `Node` that isn't a root, its parent's left or right child is that `Node` (and
//!    never both).
//! 2. After any sequence of insertions, every `Node` in a `Node`'s left subtree has a value
//!    _greater_ than its own and every `Node` in its right subtree has a value less than or equal
//!    to its own.
//!
//! > Note the ordering is the mirror image of a textbook BST. Insertion and [`search`] both use
//! > it so the tree stays consistent. Equal values always go right.
//!
//! There is no balancing so the height of the tree depends entirely on the order values are
//! inserted in. Sorted input produces a chain.
//!
//! Removing a `Node` removes its _whole subtree_. Every removed `Node` has its value and links
//! cleared so any handle a caller kept around can tell it's been removed.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{search, Node};
//!
//! let root = Node::new(50);
//! for value in [30, 70, 20, 40] {
//!     root.insert(&Node::new(value)).unwrap();
//! }
//!
//! // 70 is greater than 50 so it went left.
//! let found = search(Some(&root), 70).unwrap();
//! assert_eq!(found.node, root.left());
//! assert_eq!(found.depth, 2);
//!
//! // Removing 30 takes 20 and 40 with it.
//! let thirty = root.right().unwrap();
//! assert_eq!(thirty.remove(), 3);
//! assert!(thirty.is_disposed());
//! assert!(!search(Some(&root), 40).unwrap().is_found());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod search;

#[cfg(test)]
mod test;

pub use error::{NodeError, NodeResult};
pub use node::Node;
pub use search::{search, SearchResult};
