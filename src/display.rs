//! Draws a [`Tree`] sideways: the root on the left, right subtrees above their parent and left
//! subtrees below.
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => draw(f, root, &mut String::new(), true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `prefix` holds the connectors of the ancestors and is restored
/// before returning.
fn draw<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result {
    let len = prefix.len();

    if let Some(right) = node.right() {
        prefix.push_str(if is_left { "│   " } else { "    " });
        draw(f, right, prefix, false)?;
        prefix.truncate(len);
    }

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.key()
    )?;

    if let Some(left) = node.left() {
        prefix.push_str(if is_left { "    " } else { "│   " });
        draw(f, left, prefix, true)?;
        prefix.truncate(len);
    }

    Ok(())
}
