//! A BST that is balanced on demand. Insertion and deletion are the textbook unbalanced
//! algorithms; balance is only guaranteed right after construction or [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::Tree;
//!
//! let mut tree = Tree::from_values([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert!(tree.is_balanced());
//!
//! // Skewed inserts are not corrected automatically.
//! for key in [150, 200, 250, 300, 350] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 16);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::Error;
use crate::node::{self, Link, Node};

/// A Binary Search Tree over unique keys. Duplicate inserts and deletes of missing keys are
/// silently ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree out of an unsorted collection. Duplicates are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let tree = Tree::from_values([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree, Tree::from_values([1, 2, 3]));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        Self {
            root: Self::build_tree(values),
        }
    }

    /// Deduplicates and sorts `values` then builds a height-balanced subtree out of them by
    /// repeatedly picking the middle element (index `len / 2`) as the root.
    pub fn build_tree<I>(values: I) -> Option<Box<Node<K>>>
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = values.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let len = keys.len();
        let root = build_sorted(keys);
        log::debug!(
            "built tree of {} nodes with height {}",
            len,
            node::height_of(root.as_deref())
        );
        root
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Height of a possibly absent node: -1 for `None`, otherwise the number of edges on the
    /// longest downward path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::{Node, Tree};
    ///
    /// assert_eq!(Tree::height_of(None::<&Node<i32>>), -1);
    /// assert_eq!(Tree::height_of(Some(&Node::new(1))), 0);
    /// ```
    pub fn height_of(node: Option<&Node<K>>) -> isize {
        node::height_of(node)
    }

    /// Height of the whole tree. An empty tree has a height of -1.
    pub fn height(&self) -> isize {
        node::height_of(self.root())
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Visits nodes breadth first: grouped by depth, left to right within a depth.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`. Nothing is visited in that case.
    pub fn level_order<F>(&self, callback: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&Node<K>),
    {
        let mut visit = callback.ok_or(Error::MissingCallback)?;

        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        Ok(())
    }

    /// Visits a node, then its left subtree, then its right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    pub fn pre_order<F>(&self, callback: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&Node<K>),
    {
        let mut visit = callback.ok_or(Error::MissingCallback)?;
        walk_pre_order(self.root(), &mut visit);
        Ok(())
    }

    /// Visits the left subtree, then the node, then the right subtree. Keys come out in
    /// ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::{Node, Tree};
    ///
    /// let tree = Tree::from_values([5, 1, 3]);
    /// let mut keys = Vec::new();
    /// tree.in_order(Some(|node: &Node<i32>| keys.push(*node.key()))).unwrap();
    ///
    /// assert_eq!(keys, [1, 3, 5]);
    /// ```
    pub fn in_order<F>(&self, callback: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&Node<K>),
    {
        let mut visit = callback.ok_or(Error::MissingCallback)?;
        walk_in_order(self.root(), &mut visit);
        Ok(())
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    pub fn post_order<F>(&self, callback: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&Node<K>),
    {
        let mut visit = callback.ok_or(Error::MissingCallback)?;
        walk_post_order(self.root(), &mut visit);
        Ok(())
    }
}

impl<K: Ord> Tree<K> {
    /// Finds the node holding `key`, if any.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Distance from the root to the node holding the same key as `node`. The search descends
    /// from the root by comparing keys rather than looking for `node` itself, so any node with a
    /// matching key (even one outside this tree) is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::{Node, Tree};
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&Node::new(2)), Some(0));
    /// assert_eq!(tree.depth(&Node::new(3)), Some(1));
    /// assert_eq!(tree.depth(&Node::new(4)), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize> {
        self.depth_of(node.key())
    }

    /// Distance from the root to the node holding `key`, or `None` if the descent runs into an
    /// absent child first.
    pub fn depth_of(&self, key: &K) -> Option<usize> {
        let mut current = self.root()?;
        let mut depth = 0;
        loop {
            let next = match key.cmp(current.key()) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => current.right(),
            };
            current = next?;
            depth += 1;
        }
    }

    /// Adds `key` as a new leaf. Returns `false`, leaving the tree untouched, if the key is
    /// already present. No rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = insert(&mut self.root, key);
        if inserted {
            log::trace!("added key");
        } else {
            log::trace!("ignored duplicate key");
        }
        inserted
    }
}

impl<K: Ord + Clone> Tree<K> {
    /// Removes the node holding `key`. Returns `false` if there was no such node.
    ///
    /// A node with two children takes its in-order successor's key, and the successor node is
    /// removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert!(tree.delete_item(&2));
    /// assert!(!tree.delete_item(&2));
    /// assert_eq!(tree.keys(), [1, 3]);
    /// ```
    pub fn delete_item(&mut self, key: &K) -> bool {
        let deleted = delete(&mut self.root, key);
        if deleted {
            log::trace!("removed key");
        } else {
            log::trace!("delete of missing key ignored");
        }
        deleted
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::new();
        walk_in_order(self.root(), &mut |node: &Node<K>| keys.push(node.key.clone()));
        keys
    }

    /// Rebuilds the tree from its keys so that it is balanced again.
    pub fn rebalance(&mut self) {
        let old_height = log::log_enabled!(log::Level::Debug).then(|| self.height());
        let keys = self.keys();
        drop_link(std::mem::replace(&mut self.root, Self::build_tree(keys)));
        if let Some(old_height) = old_height {
            log::debug!(
                "rebalanced tree: height {} -> {}",
                old_height,
                self.height()
            );
        }
    }
}

/// Drops a subtree without recursing: children are unlinked first and every node is dropped
/// childless. Only teardown is iterative. The other operations (including the derived `Clone`,
/// `PartialEq` and `Debug`) recurse to a depth proportional to the tree's height.
fn drop_link<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Builds a balanced subtree from sorted, unique keys.
fn build_sorted<K>(mut keys: Vec<K>) -> Link<K> {
    if keys.is_empty() {
        return None;
    }
    let mid = keys.len() / 2;
    let right = keys.split_off(mid + 1);
    let key = keys.pop()?;

    Some(Box::new(Node {
        key,
        left: build_sorted(keys),
        right: build_sorted(right),
    }))
}

fn insert<K: Ord>(link: &mut Link<K>, key: K) -> bool {
    match link {
        None => {
            *link = Some(Node::new_boxed(key));
            true
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, key),
        },
    }
}

fn delete<K: Ord + Clone>(link: &mut Link<K>, key: &K) -> bool {
    let Some(node) = link else {
        return false;
    };

    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => {
            match (node.left.is_some(), node.right.as_deref()) {
                // Also covers a leaf: the right child is `None` too.
                (false, _) => {
                    let right = node.right.take();
                    *link = right;
                }
                (true, None) => {
                    let left = node.left.take();
                    *link = left;
                }
                (true, Some(right)) => {
                    let successor = right.leftmost().key.clone();
                    delete(&mut node.right, &successor);
                    node.key = successor;
                }
            }
            true
        }
    }
}

fn walk_pre_order<K, F: FnMut(&Node<K>)>(node: Option<&Node<K>>, visit: &mut F) {
    if let Some(node) = node {
        visit(node);
        walk_pre_order(node.left(), visit);
        walk_pre_order(node.right(), visit);
    }
}

fn walk_in_order<K, F: FnMut(&Node<K>)>(node: Option<&Node<K>>, visit: &mut F) {
    if let Some(node) = node {
        walk_in_order(node.left(), visit);
        visit(node);
        walk_in_order(node.right(), visit);
    }
}

fn walk_post_order<K, F: FnMut(&Node<K>)>(node: Option<&Node<K>>, visit: &mut F) {
    if let Some(node) = node {
        walk_post_order(node.left(), visit);
        walk_post_order(node.right(), visit);
        visit(node);
    }
}
