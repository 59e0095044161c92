//! Binary search tree without any balancing, used as a baseline for the balanced trees.

mod node;
mod tree;

pub use self::node::Node;
pub use self::tree::{delete, find, height, insert, Tree};
use crate::error::Result;
use crate::traversal::{self, Order, Traversal};
use crate::SearchTree;
use std::fmt;
use std::iter::FromIterator;

/// An unbalanced binary search tree.
///
/// Keys are placed exactly where a search would look for them and never moved afterwards, so
/// the height of the tree depends entirely on insertion order. Sorted input produces a path.
///
/// # Examples
///
/// ```
/// use balanced_trees::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(tree.height(), 2);
/// assert!(tree.contains(&3));
/// assert_eq!(tree.delete(&2), Some(2));
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
/// ```
pub struct BinarySearchTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>`.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree.
    pub fn insert(&mut self, key: T) {
        tree::insert(&mut self.root, key);
        self.len += 1;
    }

    /// Removes one occurrence of a key and returns it. Returns `None` if the key is absent.
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let ret = tree::delete(&mut self.root, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns the first node on the search path holding `key`.
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        tree::find(&self.root, key)
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

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
        tree::tear_down(&mut self.root);
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
    pub fn traverse(&self, order: Order) -> Traversal<'_, &Node<T>> {
        traversal::traverse(self.root(), order)
    }

    /// Returns an iterator over the keys in non-decreasing order.
    pub fn iter(&self) -> Traversal<'_, &Node<T>> {
        self.traverse(Order::In)
    }

    pub fn validate(&self) -> Result<()> {
        traversal::check_order(self.root())
    }
}

impl<T> SearchTree<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) {
        BinarySearchTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        BinarySearchTree::delete(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        BinarySearchTree::contains(self, key)
    }

    fn height(&self) -> usize {
        BinarySearchTree::height(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self, order: Order) -> Vec<&T> {
        self.traverse(order).collect()
    }

    fn validate(&self) -> Result<()> {
        BinarySearchTree::validate(self)
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        tree::tear_down(&mut self.root);
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        traversal::write_tree(f, self.root.as_deref(), |node| node.key.to_string())
    }
}
