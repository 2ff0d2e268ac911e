//! Lazy key traversals.
//!
//! Both iterators borrow the tree and keep an explicit stack of at most
//! `height` nodes. They are built by [`AvlTree::pre_order`] and
//! [`AvlTree::iter`]; calling either again restarts the walk.
//!
//! [`AvlTree::pre_order`]: crate::AvlTree::pre_order
//! [`AvlTree::iter`]: crate::AvlTree::iter

use std::iter::FusedIterator;

use crate::types::AvlNode;

/// Pre-order keys: node, then left subtree, then right subtree.
#[derive(Clone, Debug)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a AvlNode<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a AvlNode<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// In-order keys, ascending under the tree's comparator.
#[derive(Clone, Debug)]
pub struct InOrder<'a, K> {
    stack: Vec<&'a AvlNode<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    /// `len` must be the number of nodes below `root`.
    pub(crate) fn new(root: Option<&'a AvlNode<K>>, len: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: len,
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut node: Option<&'a AvlNode<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}

impl<K> FusedIterator for InOrder<'_, K> {}
