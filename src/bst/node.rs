use crate::bst::tree::Tree;
use crate::traversal::Cursor;

/// A struct representing an internal node of an unbalanced binary search tree.
pub struct Node<T> {
    pub key: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

impl<'a, T> Cursor<'a> for &'a Node<T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.key
    }

    fn left(self) -> Option<Self> {
        self.left.as_ref().map(|node| &**node)
    }

    fn right(self) -> Option<Self> {
        self.right.as_ref().map(|node| &**node)
    }
}
