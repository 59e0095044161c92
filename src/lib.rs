//! Self-balancing binary search trees.
//!
//! This crate provides two balanced search trees, an [`AvlTree`] that keeps the heights of
//! sibling subtrees within one of each other and a [`RedBlackTree`] that keeps the tree
//! approximately balanced with a color bit per node. A plain, unbalanced [`BinarySearchTree`] is
//! included as a baseline.
//!
//! All three trees accept duplicate keys: a key that is not less than a node's key goes into that
//! node's right subtree. All three implement [`SearchTree`], and all three can be walked in pre-,
//! in-, post-, and level-order through the shared [`traversal`] module.
//!
//! # Examples
//!
//! ```
//! use balanced_trees::{AvlTree, Order, RedBlackTree, SearchTree};
//!
//! let mut avl = AvlTree::new();
//! let mut red_black = RedBlackTree::new();
//! for key in &[10, 20, 30] {
//!     avl.insert(*key);
//!     red_black.insert(*key);
//! }
//!
//! assert_eq!(avl.keys(Order::Pre), vec![&20, &10, &30]);
//! assert_eq!(red_black.keys(Order::Pre), vec![&20, &10, &30]);
//! assert_eq!(avl.height(), 2);
//! assert!(red_black.validate().is_ok());
//! ```

#[macro_use]
extern crate log;

pub mod arena;
pub mod avl_tree;
pub mod bst;
mod error;
pub mod red_black_tree;
pub mod traversal;

pub use crate::avl_tree::AvlTree;
pub use crate::bst::BinarySearchTree;
pub use crate::error::{Error, Result};
pub use crate::red_black_tree::RedBlackTree;
pub use crate::traversal::Order;

/// The operations every tree in this crate supports.
pub trait SearchTree<T>
where
    T: Ord,
{
    /// Inserts a key. Duplicate keys are kept.
    fn insert(&mut self, key: T);

    /// Removes one occurrence of `key` and returns it, or returns `None` if the key is absent.
    fn delete(&mut self, key: &T) -> Option<T>;

    /// Returns `true` if the tree holds at least one occurrence of `key`.
    fn contains(&self, key: &T) -> bool;

    /// Returns the number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    fn height(&self) -> usize;

    /// Returns the number of keys in the tree, counting duplicates.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects the keys of the tree in the given order.
    fn keys(&self, order: Order) -> Vec<&T>;

    /// Checks every structural invariant of the tree and reports the first one that is broken.
    fn validate(&self) -> Result<()>;
}
