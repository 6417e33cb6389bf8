//! A Binary Search Tree (BST) over unique integer values with explicit,
//! on-request rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Explicit rebalancing
//!
//! [`Tree::new`] builds a tree of minimum height from its input, but
//! mutations never rebalance: enough skewed [`insert`][Tree::insert] calls
//! will degrade the tree toward a linked list. [`Tree::is_balanced`] reports
//! when that has happened and [`Tree::rebalance`] rebuilds the tree back to
//! minimum height, so mutations never pay rotation costs.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new(&[20, 30, 40, 50, 60, 70, 80]);
//! assert!(tree.is_balanced());
//!
//! for value in [81, 82, 83, 84] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use crate::tree::{Node, Tree};

#[cfg(test)]
pub(crate) mod test {
    pub(crate) mod quick;
}
