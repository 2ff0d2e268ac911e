//! Height-balanced (AVL) binary search tree.
//!
//! Keys are unique and kept in order under a strict total order (the key's
//! [`Ord`] by default, or a comparator closure). Insertion and lookup run in
//! O(log n): after every insertion each ancestor on the path recomputes its
//! cached height and, when its balance factor leaves `[-1, 1]`, applies one
//! of four rotation cases.
//!
//! Nodes are owned through `Option<Box<_>>` child slots. Restructuring
//! functions take a subtree by value and hand back its new root, which the
//! caller stores into the slot it came from.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`], [`Link`], [`Rotation`] |
//! [`util`] | rotations, case selection, `insert`, `search`, validation, `print` |
//! [`avl_tree`] | [`AvlTree`] owning wrapper |
//! [`iter`] | [`PreOrder`] and [`InOrder`] key iterators |
//! [`shared`] | [`SharedAvlTree`], one lock around the whole tree |
//! [`print`] | box-drawing dump helper |
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30, 40, 50, 25] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [30, 20, 10, 25, 40, 50]);
//! assert_eq!(tree.search(&25).map(|n| *n.key()), Some(25));
//! assert!(tree.search(&99).is_none());
//! ```

pub mod avl_tree;
pub mod error;
pub mod iter;
pub mod print;
pub mod shared;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use error::InvariantError;
pub use iter::{InOrder, PreOrder};
pub use shared::SharedAvlTree;
pub use types::{AvlNode, Comparator, Link, Rotation};
pub use util::{assert_avl_tree, insert, rotate_left, rotate_right, search};
