//! The passive building block of a [`Tree`][crate::Tree].

use std::cmp::Ordering;

/// An owned, possibly absent, child.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds a key and owns at most two children. It has no parent pointer so every `Node`
/// has exactly one owner: its parent, or the tree for the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a childless `Node`. Handy as a probe for [`Tree::depth`][crate::Tree::depth].
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of edges on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        1 + height_of(self.left()).max(height_of(self.right()))
    }

    /// Whether the subtree rooted here satisfies the AVL criterion: at every node the heights of
    /// the two subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// Number of nodes in the subtree rooted here.
    pub(crate) fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// The leftmost (smallest) node of this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut current = self;
        loop {
            let next = match key.cmp(&current.key) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right(),
            };
            current = next?;
        }
    }
}

/// Height of a possibly absent subtree. An absent subtree has a height of -1.
pub(crate) fn height_of<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, Node::height)
}

/// Returns the height of the subtree if it is balanced, `None` otherwise. This visits every node
/// once instead of recomputing heights at each level.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(1 + left.max(right))
}
