//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod tree;

pub use self::node::Node;
pub use self::tree::{delete, find, height, insert, Tree};
use crate::error::Result;
use crate::traversal::{self, Order, Traversal};
use crate::SearchTree;
use std::fmt;
use std::iter::FromIterator;

/// An ordered collection of keys backed by an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node caches the height
/// of its subtree and the path from a modified node back to the root is rebalanced with
/// rotations, so the height of a tree with `n` keys never exceeds `1.44 * log2(n + 2)`.
///
/// Duplicate keys are allowed and are routed into the right subtree.
///
/// # Examples
///
/// ```
/// use balanced_trees::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.root().map(|node| node.key), Some(20));
/// assert_eq!(tree.height(), 2);
///
/// assert_eq!(tree.delete(&10), Some(10));
/// assert_eq!(tree.delete(&10), None);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&20, &30]);
/// ```
pub struct AvlTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree and rebalances the path it was inserted along.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        self.root = Some(tree::insert(self.root.take(), key));
        self.len += 1;
    }

    /// Removes one occurrence of a key from the tree and returns it. Returns `None` and leaves
    /// the tree untouched if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let (root, ret) = tree::delete(self.root.take(), key);
        self.root = root;
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns the first node on the search path whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1).map(|node| node.height), Some(1));
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        tree::find(&self.root, key)
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Returns the height of the tree. An empty tree has height 0 and a single node height 1.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns a lazy traversal of the keys in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::{AvlTree, Order};
    ///
    /// let tree: AvlTree<u32> = vec![1, 2, 3, 4, 5].into_iter().collect();
    /// assert_eq!(tree.traverse(Order::Level).collect::<Vec<&u32>>(), vec![&2, &1, &4, &3, &5]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<'_, &Node<T>> {
        traversal::traverse(self.root(), order)
    }

    /// Returns an iterator over the keys in non-decreasing order.
    pub fn iter(&self) -> Traversal<'_, &Node<T>> {
        self.traverse(Order::In)
    }

    /// Checks key order, every cached height, and every balance factor.
    pub fn validate(&self) -> Result<()> {
        traversal::check_order(self.root())?;
        tree::check_heights(&self.root)?;
        Ok(())
    }
}

impl<T> SearchTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) {
        AvlTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        AvlTree::delete(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        AvlTree::contains(self, key)
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self, order: Order) -> Vec<&T> {
        self.traverse(order).collect()
    }

    fn validate(&self) -> Result<()> {
        AvlTree::validate(self)
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        traversal::write_tree(f, self.root.as_deref(), |node| node.key.to_string())
    }
}
