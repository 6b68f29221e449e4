//! Node storage for linked lists
//!
//! Nodes live in a slot arena and refer to their successor by [`NodeId`]
//! handle. A released slot is recycled by the next allocation.

use alloc::vec::Vec;

/// Handle addressing a node slot in a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index of this handle
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single list element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Stored value
    pub value: T,

    /// Link to the successor, `None` for the last node
    pub next: Option<NodeId>,
}

/// Slot arena owning every node of one list
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Store `value` in an unlinked node and return its handle
    pub fn alloc(&mut self, value: T) -> NodeId {
        let node = Node { value, next: None };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of its slot and mark the slot free
    ///
    /// Returns `None` if the handle does not address a live node.
    pub fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(node)
    }

    /// Borrow a live node
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    /// Mutably borrow a live node
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Exchange the values held by two live nodes, leaving links untouched
    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }

        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        if hi >= self.slots.len() {
            return;
        }

        let (left, right) = self.slots.split_at_mut(hi);
        if let (Some(x), Some(y)) = (left[lo].as_mut(), right[0].as_mut()) {
            core::mem::swap(&mut x.value, &mut y.value);
        }
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Check if the arena holds no live nodes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node and forget all handles
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");

        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|n| n.value), Some("a"));
        assert_eq!(arena.get(b).and_then(|n| n.next), None);
    }

    #[test]
    fn test_release_recycles_slot() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        let _b = arena.alloc(2);

        let released = arena.release(a).unwrap();
        assert_eq!(released.value, 1);
        assert_eq!(arena.len(), 1);
        assert!(arena.get(a).is_none());

        // Double release is rejected
        assert!(arena.release(a).is_none());

        let c = arena.alloc(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_swap_values() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        arena.get_mut(a).unwrap().next = Some(b);

        arena.swap_values(b, a);

        assert_eq!(arena.get(a).unwrap().value, 20);
        assert_eq!(arena.get(b).unwrap().value, 10);
        // Links stay where they were
        assert_eq!(arena.get(a).unwrap().next, Some(b));
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::with_capacity(4);
        arena.alloc(1);
        let b = arena.alloc(2);
        arena.release(b);

        arena.clear();
        assert!(arena.is_empty());
        assert!(arena.get(b).is_none());
    }
}
