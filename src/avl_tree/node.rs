use crate::avl_tree::tree::{self, Tree};
use crate::traversal::Cursor;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    pub fn update(&mut self) {
        let Node {
            ref mut height,
            ref left,
            ref right,
            ..
        } = *self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }
}

impl<'a, T> Cursor<'a> for &'a Node<T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.key
    }

    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }
}
