//! This crate exposes a Binary Search Tree (BST) that is balanced on
//! demand rather than on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). With clever construction
//! the height of a BST can be limited to `O(lg N)` where `N` is the number of
//! nodes in the tree. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing on demand
//!
//! [`Tree`] is built balanced: the keys are sorted and the middle one becomes
//! the root, recursively. [`Tree::insert`] and [`Tree::delete_item`] do not
//! restore balance afterwards, so a run of ascending inserts degrades the tree
//! into a list. [`Tree::is_balanced`] reports that and [`Tree::rebalance`]
//! rebuilds the tree from its sorted keys.
//!
//! ```
//! use rebalancing_bst::Tree;
//!
//! let mut tree: Tree<i32> = (0..7).collect();
//! assert!(tree.is_balanced());
//!
//! for key in 10..15 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs)]

mod display;
mod error;
pub mod node;
pub mod tree;

pub use error::Error;
pub use node::Node;
pub use tree::Tree;
