use crate::arena::{NodeArena, NodeId};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node, NodeRef, Side};
use crate::traversal::{self, Order, Traversal};
use crate::SearchTree;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;

/// An ordered collection of keys backed by a red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black. The root is black, no red node has a red child, and every path from a node down to a
/// missing child passes through the same number of black nodes. Together these keep the height
/// of a tree with `n` keys below `2 * log2(n + 1)`.
///
/// Nodes live in an arena and refer to their parent and children by id, so the upward walks
/// that restore the invariants after an insertion or deletion never fight the borrow checker.
/// Missing children are `None` and count as black.
///
/// Duplicate keys are allowed and are routed into the right subtree.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.root().unwrap();
/// assert_eq!((*root.key(), root.color()), (20, Color::Black));
/// assert_eq!(root.left().map(|node| node.color()), Some(Color::Red));
///
/// assert_eq!(tree.delete(&20), Some(20));
/// assert_eq!(tree.delete(&20), None);
/// assert!(tree.validate().is_ok());
/// ```
pub struct RedBlackTree<T> {
    arena: NodeArena<Node<T>>,
    root: Option<NodeId>,
}

impl<T> RedBlackTree<T> {
    fn color(&self, id: Option<NodeId>) -> Color {
        match id {
            Some(id) => self.arena[id].color,
            None => Color::Black,
        }
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena[id].color = color;
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.arena[id].child(side)
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        *self.arena[id].child_mut(side) = child;
    }

    // precondition: `id` is a child of `parent`
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.arena[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Points the link that used to hold `old` at `new`. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(old, parent);
                self.set_child(parent, side, new);
            },
        }
    }

    // Moves `node` down toward `side`. Its child on the opposite side takes its place.
    fn rotate(&mut self, node: NodeId, side: Side) {
        let pivot = self
            .child(node, side.opposite())
            .expect("Expected a child opposite the rotation to be `Some`.");
        trace!("rotating {:?} at slot {}", side, node.index());

        let inner = self.child(pivot, side);
        self.set_child(node, side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        let parent = self.parent(node);
        self.arena[pivot].parent = parent;
        self.replace_child(parent, node, Some(pivot));

        self.set_child(pivot, side, Some(node));
        self.arena[node].parent = Some(pivot);
    }

    // Puts `new` where `old` hangs, inheriting `old`'s parent.
    fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    fn min_id(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    fn max_id(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    fn fix_insert(&mut self, mut node: NodeId) {
        while let Some(parent) = self.parent(node) {
            if self.arena[parent].color == Color::Black {
                break;
            }
            let grandparent = self
                .parent(parent)
                .expect("Expected a red node to have a parent.");
            let side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                debug!("insert fixup: red uncle, recoloring");
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if self.child(parent, side.opposite()) == Some(node) {
                    debug!("insert fixup: inner grandchild, rotating at parent");
                    node = parent;
                    self.rotate(node, side);
                }
                debug!("insert fixup: outer grandchild, rotating at grandparent");
                let parent = self.parent(node).expect("Expected a parent after rotation.");
                let grandparent = self
                    .parent(parent)
                    .expect("Expected a grandparent after rotation.");
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    // `node` is the position that lost a black node and `parent` is its parent. `node` may be
    // `None`, which is why the parent is passed separately.
    fn fix_delete(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && self.color(node) == Color::Black {
            let current_parent = match parent {
                Some(parent) => parent,
                None => break,
            };
            let side = if self.arena[current_parent].left == node {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self
                .child(current_parent, side.opposite())
                .expect("Expected a doubly black node to have a sibling.");

            if self.arena[sibling].color == Color::Red {
                debug!("delete fixup: red sibling, rotating at parent");
                self.set_color(sibling, Color::Black);
                self.set_color(current_parent, Color::Red);
                self.rotate(current_parent, side);
                sibling = self
                    .child(current_parent, side.opposite())
                    .expect("Expected a sibling after rotation.");
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                debug!("delete fixup: black nephews, moving up");
                self.set_color(sibling, Color::Red);
                node = Some(current_parent);
                parent = self.parent(current_parent);
            } else {
                if self.color(far) == Color::Black {
                    debug!("delete fixup: red near nephew, rotating at sibling");
                    if let Some(near) = near {
                        self.set_color(near, Color::Black);
                    }
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                    sibling = self
                        .child(current_parent, side.opposite())
                        .expect("Expected a sibling after rotation.");
                }

                debug!("delete fixup: red far nephew, rotating at parent");
                let parent_color = self.arena[current_parent].color;
                self.set_color(sibling, parent_color);
                self.set_color(current_parent, Color::Black);
                if let Some(far) = self.child(sibling, side.opposite()) {
                    self.set_color(far, Color::Black);
                }
                self.rotate(current_parent, side);
                node = self.root;
                parent = None;
            }
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = &self.arena[id];
                cmp::max(self.subtree_height(node.left), self.subtree_height(node.right)) + 1
            },
        }
    }

    // Returns the black height of the subtree at `id`, counting `id` itself and not counting
    // missing children.
    fn check_subtree(&self, id: Option<NodeId>, parent: Option<NodeId>) -> Result<usize> {
        let id = match id {
            Some(id) => id,
            None => return Ok(0),
        };
        let node = &self.arena[id];
        if node.parent != parent {
            return Err(Error::BrokenParentLink);
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(Error::RedViolation);
        }

        let left = self.check_subtree(node.left, Some(id))?;
        let right = self.check_subtree(node.right, Some(id))?;
        if left != right {
            return Err(Error::BlackHeightMismatch { left, right });
        }
        Ok(match node.color {
            Color::Black => left + 1,
            Color::Red => left,
        })
    }

    /// Returns the number of black nodes on any path from the root down to a missing child, not
    /// counting the root itself, or `None` if the paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        let height = self.check_subtree(self.root, None).ok()?;
        match self.root {
            Some(root) if self.arena[root].color == Color::Black => Some(height - 1),
            _ => Some(height),
        }
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Returns the height of the tree. An empty tree has height 0 and a single node height 1.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|id| &self.arena[self.min_id(id)].key)
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|id| &self.arena[self.max_id(id)].key)
    }

    /// Returns a lazy traversal of the keys in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::{Order, RedBlackTree};
    ///
    /// let tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
    /// assert_eq!(
    ///     tree.traverse(Order::Post).collect::<Vec<&u32>>(),
    ///     vec![&10, &40, &30, &20],
    /// );
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<'_, NodeRef<'_, T>> {
        traversal::traverse(self.root(), order)
    }

    /// Returns an iterator over the keys in non-decreasing order.
    pub fn iter(&self) -> Traversal<'_, NodeRef<'_, T>> {
        self.traverse(Order::In)
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `RedBlackTree<T>` with room for `capacity` keys before the node
    /// arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            arena: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    fn find_id(&self, key: &T) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Inserts a key into the tree as a red leaf and restores the red black invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            parent = Some(id);
            side = if key < self.arena[id].key {
                Side::Left
            } else {
                Side::Right
            };
            curr = self.child(id, side);
        }

        let id = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.set_child(parent, side, Some(id)),
        }
        self.fix_insert(id);
    }

    /// Removes one occurrence of a key from the tree and returns it. Returns `None` and leaves
    /// the tree untouched if the key is absent.
    ///
    /// A node with two children is replaced by its in-order successor node, which takes over
    /// the removed node's position and color.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let target = match self.find_id(key) {
            Some(id) => id,
            None => {
                debug!("delete: key not found");
                return None;
            },
        };

        let mut removed_color = self.arena[target].color;
        let (left, right) = (self.arena[target].left, self.arena[target].right);
        let (node, parent) = match (left, right) {
            (None, child) | (child, None) => {
                let parent = self.parent(target);
                self.transplant(target, child);
                (child, parent)
            },
            (Some(left), Some(right)) => {
                let successor = self.min_id(right);
                removed_color = self.arena[successor].color;
                let node = self.arena[successor].right;
                let parent = if self.parent(successor) == Some(target) {
                    Some(successor)
                } else {
                    let parent = self.parent(successor);
                    self.transplant(successor, node);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                    parent
                };

                self.transplant(target, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                let color = self.arena[target].color;
                self.set_color(successor, color);
                (node, parent)
            },
        };

        let removed = self.arena.free(target);
        if removed_color == Color::Black {
            self.fix_delete(node, parent);
        }
        Some(removed.key)
    }

    /// Returns a handle to the first node on the search path whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::{Color, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1).map(|node| node.color()), Some(Color::Black));
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<NodeRef<'_, T>> {
        self.find_id(key).map(|id| NodeRef::new(&self.arena, id))
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find_id(key).is_some()
    }

    /// Checks key order, parent links, and every red black invariant.
    pub fn validate(&self) -> Result<()> {
        if self.color(self.root) == Color::Red {
            return Err(Error::RedRoot);
        }
        self.check_subtree(self.root, None)?;
        traversal::check_order(self.root())
    }
}

impl<T> SearchTree<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) {
        RedBlackTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        RedBlackTree::delete(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        RedBlackTree::contains(self, key)
    }

    fn height(&self) -> usize {
        RedBlackTree::height(self)
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn keys(&self, order: Order) -> Vec<&T> {
        self.traverse(order).collect()
    }

    fn validate(&self) -> Result<()> {
        RedBlackTree::validate(self)
    }
}

impl<T> Default for RedBlackTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Display for RedBlackTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        traversal::write_tree(f, self.root(), |node| {
            format!("{} ({})", node.key(), node.color())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::error::Error;
    use crate::red_black_tree::node::{Color, Side};
    use crate::traversal::Order;
    use rand::{Rng, SeedableRng, XorShiftRng};

    fn shape(tree: &RedBlackTree<u32>) -> Vec<(u32, Color)> {
        let mut ret = Vec::new();
        let mut stack: Vec<_> = tree.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            ret.push((*node.key(), node.color()));
            stack.extend(node.right());
            stack.extend(node.left());
        }
        ret
    }

    #[test]
    fn test_empty() {
        let mut tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.black_height(), Some(0));
        assert!(tree.find(&1).is_none());
        assert_eq!(tree.delete(&1), None);
        assert_eq!(tree.min(), None);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_single_insert_is_black_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        assert_eq!(shape(&tree), vec![(1, Color::Black)]);
        assert!(tree.root().unwrap().parent().is_none());
    }

    #[test]
    fn test_ascending_insert_rotates() {
        let tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![(20, Color::Black), (10, Color::Red), (30, Color::Red)],
        );
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_inner_grandchild_insert() {
        let tree: RedBlackTree<u32> = vec![30, 10, 20].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![(20, Color::Black), (10, Color::Red), (30, Color::Red)],
        );
        let tree: RedBlackTree<u32> = vec![10, 30, 20].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![(20, Color::Black), (10, Color::Red), (30, Color::Red)],
        );
    }

    #[test]
    fn test_red_uncle_recolors() {
        let tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black),
                (10, Color::Black),
                (30, Color::Black),
                (40, Color::Red),
            ],
        );
        assert_eq!(tree.black_height(), Some(1));
    }

    #[test]
    fn test_delete_red_leaf() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(tree.delete(&30), Some(30));
        assert_eq!(shape(&tree), vec![(20, Color::Black), (10, Color::Red)]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_black_with_red_child() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
        assert_eq!(tree.delete(&30), Some(30));
        assert_eq!(
            shape(&tree),
            vec![(20, Color::Black), (10, Color::Black), (40, Color::Black)],
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_black_leaf_recolors_sibling() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
        tree.delete(&40);
        assert_eq!(tree.delete(&10), Some(10));
        assert_eq!(shape(&tree), vec![(20, Color::Black), (30, Color::Red)]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_black_leaf_far_nephew() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
        assert_eq!(tree.delete(&10), Some(10));
        assert_eq!(
            shape(&tree),
            vec![(30, Color::Black), (20, Color::Black), (40, Color::Black)],
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_black_leaf_near_nephew() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30, 25].into_iter().collect();
        assert_eq!(tree.delete(&10), Some(10));
        assert_eq!(
            shape(&tree),
            vec![(25, Color::Black), (20, Color::Black), (30, Color::Black)],
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_black_leaf_red_sibling() {
        let mut tree: RedBlackTree<u32> = (1..=6).collect();
        assert_eq!(
            shape(&tree),
            vec![
                (2, Color::Black),
                (1, Color::Black),
                (4, Color::Red),
                (3, Color::Black),
                (5, Color::Black),
                (6, Color::Red),
            ],
        );

        assert_eq!(tree.delete(&1), Some(1));
        assert_eq!(
            shape(&tree),
            vec![
                (4, Color::Black),
                (2, Color::Black),
                (3, Color::Red),
                (5, Color::Black),
                (6, Color::Red),
            ],
        );
        assert_eq!(tree.black_height(), Some(1));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree: RedBlackTree<u32> = (1..=7).collect();
        let root = *tree.root().unwrap().key();
        let expected: Vec<u32> = tree.iter().cloned().filter(|key| *key != root).collect();
        let successor = expected.iter().cloned().find(|key| *key > root).unwrap();

        assert_eq!(tree.delete(&root), Some(root));
        assert_eq!(*tree.root().unwrap().key(), successor);
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), expected);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_delete_to_empty_and_reuse() {
        let mut tree: RedBlackTree<u32> = (0..10).collect();
        for key in 0..10 {
            assert_eq!(tree.delete(&key), Some(key));
            assert!(tree.validate().is_ok());
        }
        assert!(tree.is_empty());
        assert!(tree.root().is_none());

        tree.extend(0..10);
        assert_eq!(tree.len(), 10);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = RedBlackTree::new();
        let mut expected = Vec::new();

        for _ in 0..2000 {
            let key = rng.gen_range(0, 500u32);
            if rng.gen::<bool>() {
                tree.insert(key);
                expected.push(key);
            } else {
                let ret = tree.delete(&key);
                match expected.iter().position(|k| *k == key) {
                    Some(index) => {
                        expected.swap_remove(index);
                        assert_eq!(ret, Some(key));
                    },
                    None => assert_eq!(ret, None),
                }
            }
            assert_eq!(tree.validate(), Ok(()));
        }

        expected.sort();
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), expected);
    }

    #[test]
    fn test_height_bound() {
        let tree: RedBlackTree<u32> = (0..10_000).collect();
        let bound = 2.0 * ((tree.len() + 1) as f64).log2();
        assert!((tree.height() as f64) <= bound);
    }

    #[test]
    fn test_validate_detects_red_root() {
        let mut tree: RedBlackTree<u32> = vec![1].into_iter().collect();
        let root = tree.root.unwrap();
        tree.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(Error::RedRoot));
    }

    #[test]
    fn test_validate_detects_red_violation() {
        let mut tree: RedBlackTree<u32> = vec![2, 1, 3].into_iter().collect();
        let root = tree.root.unwrap();
        tree.set_color(root, Color::Red);
        tree.rotate(root, Side::Left);
        let root = tree.root.unwrap();
        tree.set_color(root, Color::Black);
        assert_eq!(tree.validate(), Err(Error::RedViolation));
    }

    #[test]
    fn test_validate_detects_black_height_mismatch() {
        let mut tree: RedBlackTree<u32> = vec![2, 1, 3].into_iter().collect();
        let left = tree.root().unwrap().left().unwrap().id();
        tree.set_color(left, Color::Black);
        assert_eq!(
            tree.validate(),
            Err(Error::BlackHeightMismatch { left: 1, right: 0 }),
        );
    }

    #[test]
    fn test_validate_detects_broken_parent_link() {
        let mut tree: RedBlackTree<u32> = vec![2, 1, 3].into_iter().collect();
        let left = tree.root().unwrap().left().unwrap().id();
        tree.arena[left].parent = None;
        assert_eq!(tree.validate(), Err(Error::BrokenParentLink));
    }

    #[test]
    fn test_traversals() {
        let tree: RedBlackTree<u32> = vec![10, 20, 30, 40].into_iter().collect();
        let keys = |order: Order| tree.traverse(order).cloned().collect::<Vec<u32>>();
        assert_eq!(keys(Order::Pre), vec![20, 10, 30, 40]);
        assert_eq!(keys(Order::In), vec![10, 20, 30, 40]);
        assert_eq!(keys(Order::Post), vec![10, 40, 30, 20]);
        assert_eq!(keys(Order::Level), vec![20, 10, 30, 40]);
    }

    #[test]
    fn test_display() {
        let tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(
            tree.to_string(),
            "Root: 20 (black)\n     |- R: 30 (red)\n     |- L: 10 (red)\n",
        );
    }
}
