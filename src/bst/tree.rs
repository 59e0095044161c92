use crate::bst::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// An unbalanced tree can degrade into a path as long as the number of keys, so nothing in this
// file recurses on the shape of the tree.

/// Inserts `key` below the last node on its search path. Keys not less than a node go right.
pub fn insert<T>(tree: &mut Tree<T>, key: T)
where
    T: Ord,
{
    let mut slot = tree;
    while let Some(node) = slot {
        slot = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *slot = Some(Box::new(Node::new(key)));
}

// Detaches the leftmost node of `tree`, splicing its right child into its place.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let mut slot = tree;
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node)
}

/// Removes the first node on the search path whose key equals `key` and returns its key.
///
/// A node with two children keeps its position and takes over the key of its in-order
/// successor, which is spliced out of the right subtree instead.
pub fn delete<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut slot = tree;
    loop {
        let ordering = match *slot {
            Some(ref node) => key.cmp(&node.key),
            None => return None,
        };
        slot = match ordering {
            Ordering::Less => &mut slot.as_mut()?.left,
            Ordering::Greater => &mut slot.as_mut()?.right,
            Ordering::Equal => break,
        };
    }

    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, right) => {
            *slot = right;
            Some(node.key)
        },
        (left, None) => {
            *slot = left;
            Some(node.key)
        },
        (left, mut right) => {
            let successor = remove_min(&mut right)?;
            let ret = mem::replace(&mut node.key, successor.key);
            node.left = left;
            node.right = right;
            *slot = Some(node);
            Some(ret)
        },
    }
}

pub fn find<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(&**node),
        };
    }
    None
}

/// Returns the number of nodes on the longest root-to-leaf path, or 0 for an empty tree.
pub fn height<T>(tree: &Tree<T>) -> usize {
    let mut height = 0;
    let mut level: Vec<&Node<T>> = tree.as_deref().into_iter().collect();
    while !level.is_empty() {
        height += 1;
        let mut next = Vec::with_capacity(level.len() * 2);
        for node in level {
            next.extend(node.left.as_deref());
            next.extend(node.right.as_deref());
        }
        level = next;
    }
    height
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_deref()?;
    while let Some(ref left) = curr.left {
        curr = left;
    }
    Some(&curr.key)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_deref()?;
    while let Some(ref right) = curr.right {
        curr = right;
    }
    Some(&curr.key)
}

/// Drops every node of `tree` without recursing.
pub fn tear_down<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{delete, find, height, insert, max, min, tear_down, Tree};
    use crate::traversal::{in_order, pre_order};

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for &key in keys {
            insert(&mut tree, key);
        }
        tree
    }

    fn keys_in_order(tree: &Tree<u32>) -> Vec<u32> {
        in_order(tree.as_deref()).cloned().collect()
    }

    #[test]
    fn test_empty() {
        let mut tree: Tree<u32> = None;
        assert_eq!(height(&tree), 0);
        assert!(find(&tree, &1).is_none());
        assert_eq!(delete(&mut tree, &1), None);
        assert_eq!(min(&tree), None);
        assert_eq!(max(&tree), None);
    }

    #[test]
    fn test_insert_keeps_shape() {
        let tree = build(&[3, 1, 4, 2, 5]);
        assert_eq!(
            pre_order(tree.as_deref()).cloned().collect::<Vec<u32>>(),
            vec![3, 1, 2, 4, 5],
        );
        assert_eq!(height(&tree), 3);
    }

    #[test]
    fn test_sorted_input_degrades() {
        let mut tree = build(&(0..1000).collect::<Vec<u32>>());
        assert_eq!(height(&tree), 1000);
        assert_eq!(min(&tree), Some(&0));
        assert_eq!(max(&tree), Some(&999));
        tear_down(&mut tree);
        assert!(tree.is_none());
    }

    #[test]
    fn test_duplicates_go_right() {
        let tree = build(&[2, 2, 2]);
        let root = tree.as_ref().unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|node| node.key), Some(2));
        assert_eq!(height(&tree), 3);
    }

    #[test]
    fn test_delete_leaf_and_single_child() {
        let mut tree = build(&[5, 3, 8, 9]);
        assert_eq!(delete(&mut tree, &3), Some(3));
        assert_eq!(delete(&mut tree, &8), Some(8));
        assert_eq!(keys_in_order(&tree), vec![5, 9]);
    }

    #[test]
    fn test_delete_two_children() {
        let mut tree = build(&[5, 3, 8, 7, 9, 6]);
        assert_eq!(delete(&mut tree, &5), Some(5));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(6));
        assert_eq!(keys_in_order(&tree), vec![3, 6, 7, 8, 9]);
    }

    #[test]
    fn test_delete_absent() {
        let mut tree = build(&[5, 3, 8]);
        assert_eq!(delete(&mut tree, &4), None);
        assert_eq!(keys_in_order(&tree), vec![3, 5, 8]);
    }

    #[test]
    fn test_find() {
        let tree = build(&[5, 3, 8]);
        assert_eq!(find(&tree, &8).map(|node| node.key), Some(8));
        assert!(find(&tree, &4).is_none());
    }
}
