use crate::arena::{NodeArena, NodeId};
use crate::traversal::Cursor;
use std::fmt;

/// An enum representing the color of a node in a red black tree.
///
/// Absent children count as black.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// An enum naming one of the two children of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// Links are arena ids. The parent link does not own anything; the arena owns every node.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Option<NodeId>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only handle to a node of a `RedBlackTree<T>`.
pub struct NodeRef<'a, T> {
    arena: &'a NodeArena<Node<T>>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<Node<T>>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a Node<T> {
        let arena: &'a NodeArena<Node<T>> = self.arena;
        &arena[self.id]
    }

    fn to(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| NodeRef::new(self.arena, id))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a T {
        &self.node().key
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn parent(&self) -> Option<Self> {
        self.to(self.node().parent)
    }

    pub fn left(&self) -> Option<Self> {
        self.to(self.node().left)
    }

    pub fn right(&self) -> Option<Self> {
        self.to(self.node().right)
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> Cursor<'a> for NodeRef<'a, T> {
    type Key = T;

    fn key(self) -> &'a T {
        NodeRef::key(&self)
    }

    fn left(self) -> Option<Self> {
        NodeRef::left(&self)
    }

    fn right(self) -> Option<Self> {
        NodeRef::right(&self)
    }
}
