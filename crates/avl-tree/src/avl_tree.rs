use std::cmp::Ordering;
use std::fmt::{self, Debug};

use tracing::trace;

use crate::error::InvariantError;
use crate::iter::{InOrder, PreOrder};
use crate::types::{AvlNode, Link};
use crate::util;

/// Zeroes the element count on drop while armed, so an insert that unwinds
/// out of the comparator leaves an empty tree with a matching `len`.
struct ResetLenOnUnwind<'a> {
    len: &'a mut usize,
    armed: bool,
}

impl Drop for ResetLenOnUnwind<'_> {
    fn drop(&mut self) {
        if self.armed {
            *self.len = 0;
        }
    }
}

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// AVL tree of unique keys.
///
/// Owns the root slot; every insertion stores the subtree root handed back
/// by the balancing core.
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K>,
    len: usize,
    comparator: C,
}

impl<K: Ord> AvlTree<K, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord> Default for AvlTree<K, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Inserts `key`. Returns `false`, leaving the tree untouched, when an
    /// equal key is already present.
    ///
    /// If the comparator panics, the tree is left empty (`len() == 0`): the
    /// root was already detached and is dropped during unwinding.
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        let mut guard = ResetLenOnUnwind {
            len: &mut self.len,
            armed: true,
        };
        let root = util::insert_at(self.root.take(), key, &self.comparator, &mut inserted);
        guard.armed = false;
        if inserted {
            *guard.len += 1;
        }
        drop(guard);
        self.root = Some(root);
        trace!(inserted, len = self.len, height = self.height(), "insert");
        inserted
    }

    /// Node holding `key`, if any.
    pub fn search(&self, key: &K) -> Option<&AvlNode<K>> {
        util::search(self.root(), key, &self.comparator)
    }

    /// Stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.search(key).map(AvlNode::key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        self.root().map_or(0, AvlNode::height)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        util::first(self.root()).map(AvlNode::key)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        util::last(self.root()).map(AvlNode::key)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Keys in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root(), self.len)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let counted = util::assert_avl_tree(self.root(), &self.comparator)?;
        if counted != self.len {
            return Err(InvariantError::LenMismatch {
                expected: counted,
                actual: self.len,
            });
        }
        Ok(())
    }
}

impl<K: Debug, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Multi-line structural dump.
    pub fn print(&self) -> String {
        util::print(self.root(), "")
    }
}

impl<K: Debug, C> Debug for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Clone, C: Clone> Clone for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

/// Structural equality: same keys in the same shape with the same heights.
impl<K: PartialEq, C, D> PartialEq<AvlTree<K, D>> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
    D: Fn(&K, &K) -> Ordering,
{
    fn eq(&self, other: &AvlTree<K, D>) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
