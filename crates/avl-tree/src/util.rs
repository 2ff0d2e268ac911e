//! Balancing core: rotations, case selection, insert and search over links.
//!
//! All functions that may restructure a subtree take the subtree by value and
//! return its new owner. Callers must store the returned box back into the
//! slot they took it from.

use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::trace;

use crate::error::InvariantError;
use crate::print::{print_tree, PrintChild};
use crate::types::{AvlNode, Link, Rotation};

/// Right rotation around `y`.
///
/// ```text
///       y           x
///      / \         / \
///     x   C  =>   A   y
///    / \             / \
///   A   T2          T2  C
/// ```
///
/// Returns `y` unchanged when it has no left child.
pub fn rotate_right<K>(mut y: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation around `x`, the mirror of [`rotate_right`].
///
/// Returns `x` unchanged when it has no right child.
pub fn rotate_left<K>(mut x: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Picks the rebalancing case for a node with the given balance factor.
///
/// `child_ord` is the comparison of the inserted key against the key of the
/// child the insertion descended into. `None` when that child did not exist
/// before the insertion, in which case the node cannot be out of balance.
pub fn classify(balance: isize, child_ord: Option<Ordering>) -> Option<Rotation> {
    match child_ord? {
        Ordering::Less if balance > 1 => Some(Rotation::LeftLeft),
        Ordering::Greater if balance < -1 => Some(Rotation::RightRight),
        Ordering::Greater if balance > 1 => Some(Rotation::LeftRight),
        Ordering::Less if balance < -1 => Some(Rotation::RightLeft),
        _ => None,
    }
}

/// Restores the AVL invariant at `node` after an insertion below it.
///
/// `node` must already carry a fresh height.
pub fn rebalance<K>(mut node: Box<AvlNode<K>>, child_ord: Option<Ordering>) -> Box<AvlNode<K>> {
    let balance = node.balance();
    let Some(rotation) = classify(balance, child_ord) else {
        return node;
    };
    trace!(?rotation, balance, "rebalancing");
    match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

/// Inserts `key` below `link` and returns the new subtree root.
///
/// Inserting a key that is already present returns the subtree unchanged.
pub fn insert<K, C>(link: Link<K>, key: K, cmp: &C) -> Box<AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering + ?Sized,
{
    let mut inserted = false;
    insert_at(link, key, cmp, &mut inserted)
}

pub(crate) fn insert_at<K, C>(link: Link<K>, key: K, cmp: &C, inserted: &mut bool) -> Box<AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering + ?Sized,
{
    let Some(mut node) = link else {
        *inserted = true;
        return Box::new(AvlNode::new(key));
    };

    let child_ord = match cmp(&key, &node.key) {
        Ordering::Less => {
            let ord = node.left.as_deref().map(|l| cmp(&key, &l.key));
            node.left = Some(insert_at(node.left.take(), key, cmp, inserted));
            ord
        }
        Ordering::Greater => {
            let ord = node.right.as_deref().map(|r| cmp(&key, &r.key));
            node.right = Some(insert_at(node.right.take(), key, cmp, inserted));
            ord
        }
        Ordering::Equal => {
            trace!("duplicate key, insert is a no-op");
            return node;
        }
    };

    // A duplicate further down leaves every height on the path as it was.
    if !*inserted {
        return node;
    }

    node.update_height();
    rebalance(node, child_ord)
}

/// Finds the node holding `key`, following only the comparison path.
pub fn search<'a, K, C>(mut node: Option<&'a AvlNode<K>>, key: &K, cmp: &C) -> Option<&'a AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering + ?Sized,
{
    while let Some(n) = node {
        node = match cmp(key, &n.key) {
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right(),
            Ordering::Less => n.left(),
        };
    }
    None
}

/// Leftmost node.
pub fn first<K>(mut node: Option<&AvlNode<K>>) -> Option<&AvlNode<K>> {
    while let Some(l) = node?.left() {
        node = Some(l);
    }
    node
}

/// Rightmost node.
pub fn last<K>(mut node: Option<&AvlNode<K>>) -> Option<&AvlNode<K>> {
    while let Some(r) = node?.right() {
        node = Some(r);
    }
    node
}

/// True recursive height, ignoring the cached values.
pub fn tree_height<K>(node: Option<&AvlNode<K>>) -> usize {
    node.map_or(0, |n| 1 + tree_height(n.left()).max(tree_height(n.right())))
}

/// Checks ordering, cached heights and balance of the whole subtree.
///
/// Returns the number of nodes on success.
pub fn assert_avl_tree<K, C>(node: Option<&AvlNode<K>>, cmp: &C) -> Result<usize, InvariantError>
where
    C: Fn(&K, &K) -> Ordering + ?Sized,
{
    fn validate<'a, K, C>(
        node: &'a AvlNode<K>,
        cmp: &C,
        prev: &mut Option<&'a K>,
    ) -> Result<(usize, usize), InvariantError>
    where
        C: Fn(&K, &K) -> Ordering + ?Sized,
    {
        let (lh, lc) = match node.left() {
            Some(l) => validate(l, cmp, prev)?,
            None => (0, 0),
        };

        if let Some(p) = *prev {
            if cmp(p, &node.key) != Ordering::Less {
                return Err(InvariantError::OrderViolated);
            }
        }
        *prev = Some(&node.key);

        let (rh, rc) = match node.right() {
            Some(r) => validate(r, cmp, prev)?,
            None => (0, 0),
        };

        let expected = 1 + lh.max(rh);
        if node.height != expected {
            return Err(InvariantError::HeightMismatch {
                expected,
                actual: node.height,
            });
        }
        let balance = lh as isize - rh as isize;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced { balance });
        }

        Ok((expected, lc + rc + 1))
    }

    let Some(node) = node else {
        return Ok(0);
    };
    let mut prev = None;
    validate(node, cmp, &mut prev).map(|(_, count)| count)
}

/// Debug dump of a subtree, one node per line.
pub fn print<K: Debug>(node: Option<&AvlNode<K>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let label = format!("{:?} [h={}]", n.key, n.height);
            if n.is_leaf() {
                return label;
            }
            let left = |tab: &str| print(n.left(), tab);
            let right = |tab: &str| print(n.right(), tab);
            let children: [Option<&PrintChild>; 2] = [Some(&left as &PrintChild), Some(&right as &PrintChild)];
            format!("{label}{}", print_tree(Some(tab), &children))
        }
    }
}

/// Tree height bound after inserting `n` distinct keys: `⌈1.44·log₂(n+2)⌉`.
pub fn height_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}
