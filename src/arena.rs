//! Index-addressed node storage.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable handle to a value stored in a `NodeArena<T>`.
///
/// Handles are plain indices, so they are trivially copyable and carry no borrow. A handle stays
/// valid until the value it refers to is freed; afterwards the slot may be handed out again.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw slot index of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// An allocator for a single type of node.
///
/// Every node lives in one `Vec` and is addressed by a `NodeId`. Freed slots are threaded onto a
/// free list and reused by later allocations, so ids of live nodes never move. All nodes are
/// dropped together with the arena.
///
/// # Examples
///
/// ```
/// use balanced_trees::arena::NodeArena;
///
/// let mut arena = NodeArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    len: usize,
}

impl<T> NodeArena<T> {
    /// Constructs a new, empty `NodeArena<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `NodeArena<T>` with room for `capacity` nodes before it needs to
    /// grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::NodeArena;
    ///
    /// let arena: NodeArena<u32> = NodeArena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its handle. Reuses the most recently freed slot if one exists.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free_head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => {
                trace!("reusing arena slot {}", id.0);
                match mem::replace(&mut self.slots[id.0], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.free_head = next,
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
                id
            },
        }
    }

    /// Removes the value behind `id` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range or refers to a slot that is already free.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free an invalid slot.");
        }
        let old = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free_head));
        match old {
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
            Slot::Occupied(value) => {
                self.free_head = Some(id);
                self.len -= 1;
                value
            },
        }
    }

    /// Returns an immutable reference to the value behind `id`, or `None` if the slot is free or
    /// out of range.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `id`, or `None` if the slot is free or out
    /// of range.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node id out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node id out of bounds.")
    }
}
