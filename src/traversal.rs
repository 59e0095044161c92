//! Read-only traversals shared by every tree in this crate.
//!
//! The traversals never look at a concrete node type. Instead each tree hands out a `Cursor`, a
//! cheap copyable handle that can report its key and step to its children. Boxed trees use plain
//! node references as cursors and the arena-backed red black tree uses a `(tree, id)` pair.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A read-only handle to a node of a binary tree.
pub trait Cursor<'a>: Copy {
    type Key: 'a;

    fn key(self) -> &'a Self::Key;

    fn left(self) -> Option<Self>;

    fn right(self) -> Option<Self>;
}

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields keys in non-decreasing order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth-first, level by level, left to right.
    Level,
}

impl Order {
    pub const ALL: [Order; 4] = [Order::Pre, Order::In, Order::Post, Order::Level];
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Order::Pre),
            "in" | "inorder" | "in-order" => Ok(Order::In),
            "post" | "postorder" | "post-order" => Ok(Order::Post),
            "level" | "levelorder" | "level-order" | "bfs" => Ok(Order::Level),
            _ => Err(Error::UnknownOrder(name.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Order::Pre => "pre-order",
            Order::In => "in-order",
            Order::Post => "post-order",
            Order::Level => "level-order",
        };
        f.write_str(name)
    }
}

enum State<C> {
    Pre(Vec<C>),
    In { stack: Vec<C>, current: Option<C> },
    // the flag marks nodes whose children were already pushed
    Post(Vec<(C, bool)>),
    Level(VecDeque<C>),
}

/// A lazy, single-pass iterator over the keys of a tree in a fixed `Order`.
pub struct Traversal<'a, C> {
    state: State<C>,
    marker: PhantomData<&'a ()>,
}

/// Returns a traversal of the tree rooted at `root`. An absent root yields nothing.
pub fn traverse<'a, C>(root: Option<C>, order: Order) -> Traversal<'a, C>
where
    C: Cursor<'a>,
{
    let state = match order {
        Order::Pre => State::Pre(root.into_iter().collect()),
        Order::In => State::In {
            stack: Vec::new(),
            current: root,
        },
        Order::Post => State::Post(root.into_iter().map(|node| (node, false)).collect()),
        Order::Level => State::Level(root.into_iter().collect()),
    };
    Traversal {
        state,
        marker: PhantomData,
    }
}

pub fn pre_order<'a, C: Cursor<'a>>(root: Option<C>) -> Traversal<'a, C> {
    traverse(root, Order::Pre)
}

pub fn in_order<'a, C: Cursor<'a>>(root: Option<C>) -> Traversal<'a, C> {
    traverse(root, Order::In)
}

pub fn post_order<'a, C: Cursor<'a>>(root: Option<C>) -> Traversal<'a, C> {
    traverse(root, Order::Post)
}

pub fn level_order<'a, C: Cursor<'a>>(root: Option<C>) -> Traversal<'a, C> {
    traverse(root, Order::Level)
}

impl<'a, C> Iterator for Traversal<'a, C>
where
    C: Cursor<'a>,
{
    type Item = &'a C::Key;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Pre(ref mut stack) => stack.pop().map(|node| {
                stack.extend(node.right());
                stack.extend(node.left());
                node.key()
            }),
            State::In {
                ref mut stack,
                ref mut current,
            } => {
                while let Some(node) = *current {
                    stack.push(node);
                    *current = node.left();
                }
                stack.pop().map(|node| {
                    *current = node.right();
                    node.key()
                })
            },
            State::Post(ref mut stack) => {
                while let Some((node, expanded)) = stack.pop() {
                    if expanded {
                        return Some(node.key());
                    }
                    stack.push((node, true));
                    stack.extend(node.right().map(|child| (child, false)));
                    stack.extend(node.left().map(|child| (child, false)));
                }
                None
            },
            State::Level(ref mut queue) => queue.pop_front().map(|node| {
                queue.extend(node.left());
                queue.extend(node.right());
                node.key()
            }),
        }
    }
}

/// Writes the shape of the tree rooted at `root`, one node per line.
///
/// The root comes first, then each node's right subtree above its left subtree, indented four
/// spaces per level. `label` formats a single node.
pub fn write_tree<'a, C, F>(f: &mut fmt::Formatter, root: Option<C>, label: F) -> fmt::Result
where
    C: Cursor<'a>,
    F: Fn(C) -> String,
{
    let mut stack: Vec<(C, usize, &str)> =
        root.into_iter().map(|node| (node, 0, "Root: ")).collect();
    while let Some((node, level, prefix)) = stack.pop() {
        writeln!(f, "{}{}{}", " ".repeat(level * 4), prefix, label(node))?;
        stack.extend(node.left().map(|child| (child, level + 1, " |- L: ")));
        stack.extend(node.right().map(|child| (child, level + 1, " |- R: ")));
    }
    Ok(())
}

/// Checks that an in-order walk of the tree rooted at `root` never steps to a smaller key.
pub fn check_order<'a, C>(root: Option<C>) -> Result<()>
where
    C: Cursor<'a>,
    C::Key: Ord,
{
    let mut keys = in_order(root);
    let mut prev = match keys.next() {
        Some(key) => key,
        None => return Ok(()),
    };
    for key in keys {
        if key < prev {
            return Err(Error::OutOfOrder);
        }
        prev = key;
    }
    Ok(())
}
