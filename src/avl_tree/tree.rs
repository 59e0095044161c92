use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at a node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at a node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores `|balance| <= 1` at `node`, assuming both subtrees are valid avl trees whose heights
// differ by at most two.
//
// The heavy child's balance picks between a single and a double rotation. After an insertion
// that child leans toward the side the new key went down, so this agrees with deciding by
// comparing the new key with the child's key. After a deletion the child may be level, in which
// case a single rotation suffices.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    let balance = node.balance();
    if balance > 1 {
        if let Some(child) = node.left.take() {
            node.left = Some(if child.balance() < 0 {
                debug!("left-right case");
                rotate_left(child)
            } else {
                debug!("left-left case");
                child
            });
        }
        rotate_right(node)
    } else if balance < -1 {
        if let Some(child) = node.right.take() {
            node.right = Some(if child.balance() > 0 {
                debug!("right-left case");
                rotate_right(child)
            } else {
                debug!("right-right case");
                child
            });
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Inserts `key` into `tree` and returns the new root. Keys not less than a node go right, so
/// duplicates accumulate.
pub fn insert<T>(tree: Tree<T>, key: T) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return Box::new(Node::new(key)),
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    balance(node)
}

// Detaches the minimum node of the tree rooted at `node`, rebalancing the path back up. Returns
// the remaining tree and the detached node.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, Box<Node<T>>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        },
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(balance(node)), min)
        },
    }
}

/// Removes one occurrence of `key` from `tree`. Returns the new root together with the removed
/// key, or the unchanged tree and `None` if the key is absent.
///
/// A node with two children keeps its position and takes over the key of its in-order
/// successor, whose node is detached from the right subtree instead.
pub fn delete<T>(tree: Tree<T>, key: &T) -> (Tree<T>, Option<T>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let ret = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, ret) = delete(node.left.take(), key);
            node.left = left;
            ret
        },
        Ordering::Greater => {
            let (right, ret) = delete(node.right.take(), key);
            node.right = right;
            ret
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, Some(node.key)),
            (left, None) => return (left, Some(node.key)),
            (left, Some(right)) => {
                let (right, successor) = remove_min(right);
                node.left = left;
                node.right = right;
                Some(mem::replace(&mut node.key, successor.key))
            },
        },
    };

    match ret {
        Some(_) => (Some(balance(node)), ret),
        None => (Some(node), None),
    }
}

pub fn find<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Verifies every cached height and balance factor below `tree` and returns the tree's height.
pub fn check_heights<T>(tree: &Tree<T>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let left = check_heights(&node.left)?;
    let right = check_heights(&node.right)?;
    let actual = cmp::max(left, right) + 1;
    if node.height != actual {
        return Err(Error::HeightMismatch {
            cached: node.height,
            actual,
        });
    }
    let balance = left as isize - right as isize;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }
    Ok(actual)
}
