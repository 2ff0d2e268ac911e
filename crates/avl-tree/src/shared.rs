use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::avl_tree::AvlTree;
use crate::types::AvlNode;

/// An [`AvlTree`] behind a single exclusive lock.
///
/// Every call holds the lock for its whole duration, so no caller ever sees
/// a partially rotated tree. Node references only escape through
/// [`SharedAvlTree::search_with`], scoped to the lock.
pub struct SharedAvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: Mutex<AvlTree<K, C>>,
}

impl<K: Ord> SharedAvlTree<K> {
    pub fn new() -> Self {
        Self::from_tree(AvlTree::new())
    }
}

impl<K: Ord> Default for SharedAvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> SharedAvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn from_tree(tree: AvlTree<K, C>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }

    // A panic under the lock comes either from a `search_with` closure, which
    // runs on an untouched tree, or from the comparator during `insert`, which
    // leaves the tree empty with `len() == 0`. Both states are valid.
    fn lock(&self) -> MutexGuard<'_, AvlTree<K, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, key: K) -> bool {
        self.lock().insert(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    /// Runs `f` on the search result while the lock is held.
    pub fn search_with<R, F>(&self, key: &K, f: F) -> R
    where
        F: FnOnce(Option<&AvlNode<K>>) -> R,
    {
        let tree = self.lock();
        f(tree.search(key))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the keys in pre-order.
    pub fn pre_order_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.lock().pre_order().cloned().collect()
    }

    pub fn into_inner(self) -> AvlTree<K, C> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
