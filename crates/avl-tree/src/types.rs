//! Node and link definitions.
//!
//! Every child slot is an exclusively-owned `Option<Box<_>>`. There are no
//! parent pointers: rebalancing happens while the recursive insert unwinds,
//! and each call hands the (possibly new) subtree owner back to its caller,
//! which stores it into its own slot.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Owned optional subtree. `None` is the empty tree.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// Strict total order over keys.
///
/// Must behave like [`Ord::cmp`]: `Less`, `Equal` and `Greater` drive the
/// descent and the rebalancing case selection directly.
pub type Comparator<K> = dyn Fn(&K, &K) -> Ordering;

/// One key stored in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AvlNode<K> {
    pub(crate) key: K,
    /// Height of the subtree rooted here; 1 for a leaf.
    pub(crate) height: usize,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) left: Link<K>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) right: Link<K>,
}

impl<K> AvlNode<K> {
    /// New leaf.
    pub fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached subtree height.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&AvlNode<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&AvlNode<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Cached height of a link, 0 when absent.
#[inline]
pub fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The four imbalance shapes resolved after an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Rotation {
    /// Single right rotation.
    LeftLeft,
    /// Single left rotation.
    RightRight,
    /// Left rotation of the left child, then right rotation.
    LeftRight,
    /// Right rotation of the right child, then left rotation.
    RightLeft,
}
