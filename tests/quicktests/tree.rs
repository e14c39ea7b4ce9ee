use quickcheck_macros::quickcheck;
use rebalancing_bst::{Node, Tree};

use std::collections::BTreeSet;

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete_item(k);
                set.remove(k);
            }
        }
    }
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.in_order(Some(|node: &Node<i8>| keys.push(*node.key())))
        .unwrap();
    keys
}

fn sorted(mut keys: Vec<i8>) -> Vec<i8> {
    keys.sort_unstable();
    keys
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = Tree::from_values(xs.clone());
    let mut set = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);

    let keys = in_order(&tree);
    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_and_rebalance_are_balanced(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = Tree::from_values(xs);
    let built_balanced = tree.is_balanced();

    do_ops(&ops, &mut tree, &mut BTreeSet::new());
    tree.rebalance();

    built_balanced && tree.is_balanced()
}

#[quickcheck]
fn build_ignores_order_and_duplicates(xs: Vec<i8>) -> bool {
    let mut reversed = xs.clone();
    reversed.reverse();
    let doubled = xs.iter().chain(xs.iter()).copied().collect::<Vec<_>>();

    let tree = Tree::from_values(xs);
    tree == Tree::from_values(reversed) && tree == Tree::from_values(doubled)
}

#[quickcheck]
fn insert_duplicate_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let before = tree.clone();

    xs.iter().all(|x| !tree.insert(*x)) && tree == before
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, ops: Vec<Op<i8>>, key: i8) -> bool {
    let mut tree = Tree::from_values(xs);
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let before = tree.len();
    let present = tree.contains(&key);
    let deleted = tree.delete_item(&key);

    let expected = if present { before - 1 } else { before };
    deleted == present && tree.len() == expected && !tree.contains(&key)
}

#[quickcheck]
fn traversals_visit_the_same_keys(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs);
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let mut level = Vec::new();
    let mut pre = Vec::new();
    let mut post = Vec::new();
    tree.level_order(Some(|node: &Node<i8>| level.push(*node.key())))
        .unwrap();
    tree.pre_order(Some(|node: &Node<i8>| pre.push(*node.key())))
        .unwrap();
    tree.post_order(Some(|node: &Node<i8>| post.push(*node.key())))
        .unwrap();

    let in_order = in_order(&tree);
    sorted(level) == in_order && sorted(pre) == in_order && sorted(post) == in_order
}

#[quickcheck]
fn depth_matches_descent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs);
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    // The root sits at depth 0 and every key is found no deeper than the tree's height.
    let root_ok = tree
        .root()
        .map_or(true, |root| tree.depth(root) == Some(0));
    let all_found = in_order(&tree).iter().all(|key| {
        tree.depth_of(key)
            .map_or(false, |depth| depth as isize <= tree.height())
    });

    root_ok && all_found
}

/// Recomputes heights at every node, straight from the definition.
fn naive_is_balanced(node: Option<&Node<i8>>) -> bool {
    match node {
        None => true,
        Some(node) => {
            let left = Tree::height_of(node.left());
            let right = Tree::height_of(node.right());
            (left - right).abs() <= 1
                && naive_is_balanced(node.left())
                && naive_is_balanced(node.right())
        }
    }
}

#[quickcheck]
fn is_balanced_matches_naive_check(xs: Vec<i8>, skew: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs);
    // Ascending runs hang chains off whichever leaves they reach, often below a root that is
    // still within one level on both sides.
    let mut skew = skew;
    skew.sort_unstable();
    for key in skew {
        tree.insert(key);
    }

    tree.is_balanced() == naive_is_balanced(tree.root())
}

#[test]
fn chain_under_a_level_root_is_unbalanced() {
    let mut tree = Tree::from_values([4, 2, 6, 1, 3, 5, 7]);
    // The root subtrees end up with heights 4 and 3, but the chain 1 -> -3 -> -2 -> -1 breaks
    // the rule at 2.
    for key in [-3, -2, -1, 8, 9] {
        tree.insert(key);
    }

    let root = tree.root().unwrap();
    assert!((Tree::height_of(root.left()) - Tree::height_of(root.right())).abs() <= 1);
    assert!(!naive_is_balanced(tree.root()));
    assert!(!tree.is_balanced());
}
