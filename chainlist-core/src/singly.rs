//! Singly-linked list
//!
//! Nodes are threaded from `head` to `tail` through forward links. Both ends
//! are reachable in O(1); positional access walks the chain from `head`.
//!
//! The list is not thread-safe. Every mutating method takes `&mut self`.

use crate::error::ListError;
use crate::list::List;
use crate::node::{Node, NodeArena, NodeId};
use crate::Result;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use hashbrown::HashSet;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// A singly-linked list
///
/// Maintains handles to the first and last nodes and the total size.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

/// Forward walk over the live chain, bounded by the list size
struct Chain<'a, T> {
    nodes: &'a NodeArena<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = (NodeId, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.nodes.get(id)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((id, node))
    }
}

impl<T> LinkedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Create a new empty list with node storage for `capacity` elements
    ///
    /// The capacity is a hint; the list still grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Create a list holding `values` in order
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.append(values);
        list
    }

    /// Number of elements in the list
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append values to the end of the list
    pub fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.append(values);
    }

    /// Append values to the end of the list, in order
    pub fn append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let tail = self.tail;
        self.splice_after(tail, values);
    }

    /// Insert values at the front of the list
    ///
    /// The list afterwards starts with `values` in the order given,
    /// followed by its previous contents.
    pub fn prepend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.splice_after(None, values);
    }

    /// Borrow the first value
    pub fn first(&self) -> Result<&T> {
        self.head
            .and_then(|id| self.nodes.get(id))
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    /// Borrow the last value
    pub fn last(&self) -> Result<&T> {
        self.tail
            .and_then(|id| self.nodes.get(id))
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    /// Borrow the value at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;

        #[cfg(feature = "logging")]
        trace!("Walking to index {} of {}", index, self.size);

        self.chain()
            .nth(index)
            .map(|(_, node)| &node.value)
            .ok_or(ListError::out_of_bounds(index, self.size))
    }

    /// Copy all values into a new vector, head to tail
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.size);
        values.extend(self.chain().map(|(_, node)| node.value.clone()));
        values
    }

    /// Position of the first element equal to `value`
    ///
    /// Fails with [`ListError::EmptyList`] on an empty list and
    /// [`ListError::ElementNotFound`] when nothing matches.
    pub fn index_of(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.chain()
            .position(|(_, node)| node.value == *value)
            .ok_or(ListError::ElementNotFound)
    }

    /// Check that every distinct value in `values` is in the list
    ///
    /// Duplicates in `values` collapse. No values at all is always contained.
    pub fn contains<I: IntoIterator<Item = T>>(&self, values: I) -> bool
    where
        T: Eq + Hash,
    {
        let mut to_find: HashSet<T> = values.into_iter().collect();
        if to_find.is_empty() {
            return true;
        }
        if self.size < to_find.len() {
            return false;
        }

        for (_, node) in self.chain() {
            if to_find.remove(&node.value) && to_find.is_empty() {
                return true;
            }
        }

        false
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        debug!("Clearing list of {} elements", self.size);

        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    /// Remove the element at `index` and return its value
    ///
    /// Emptiness is checked before bounds.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        self.check_bounds(index)?;

        let oob = ListError::out_of_bounds(index, self.size);
        let prev = match index {
            0 => None,
            i => Some(self.locate(i - 1).ok_or(oob)?),
        };
        let target = match prev {
            Some(p) => self.next_of(p),
            None => self.head,
        }
        .ok_or(oob)?;

        let successor = self.next_of(target);
        match prev {
            Some(p) => self.link(p, successor),
            None => self.head = successor,
        }
        if self.tail == Some(target) {
            self.tail = prev;
        }
        self.size -= 1;

        #[cfg(feature = "logging")]
        debug!("Unlinked node at index {}, size now {}", index, self.size);

        self.nodes.release(target).map(|node| node.value).ok_or(oob)
    }

    /// Exchange the values at `i` and `j`
    ///
    /// Node identities stay the same; only values move. Both indices are
    /// validated even when they are equal.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_bounds(i)?;
        self.check_bounds(j)?;

        if i == j {
            return Ok(());
        }

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let mut lo_id = None;
        let mut hi_id = None;
        for (position, (id, _)) in self.chain().enumerate().take(hi + 1) {
            if position == lo {
                lo_id = Some(id);
            }
            if position == hi {
                hi_id = Some(id);
            }
        }

        match (lo_id, hi_id) {
            (Some(a), Some(b)) => {
                self.nodes.swap_values(a, b);
                Ok(())
            }
            _ => Err(ListError::out_of_bounds(hi, self.size)),
        }
    }

    /// Insert values, in order, starting at `index`
    ///
    /// `index == 0` prepends and `index == size` appends; anything past the
    /// end fails with [`ListError::IndexOutOfBounds`].
    pub fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        if index > self.size {
            return Err(ListError::out_of_bounds(index, self.size));
        }

        if index == 0 {
            self.prepend(values);
            return Ok(());
        }
        if index == self.size {
            self.append(values);
            return Ok(());
        }

        let prev = self
            .locate(index - 1)
            .ok_or(ListError::out_of_bounds(index, self.size))?;
        self.splice_after(Some(prev), values);

        Ok(())
    }

    /// Overwrite the value at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_bounds(index)?;

        let node = self
            .locate(index)
            .and_then(|id| self.nodes.get_mut(id))
            .ok_or(ListError::out_of_bounds(index, self.size))?;
        node.value = value;

        Ok(())
    }

    /// Walk the chain and verify the structural invariants
    ///
    /// Checks that:
    /// 1. `size == 0` exactly when both `head` and `tail` are unset
    /// 2. Walking from `head` visits `size` nodes and stops at `tail`
    /// 3. No node outside the chain is still allocated
    pub fn is_consistent(&self) -> bool {
        let empty = self.size == 0;
        if empty != self.head.is_none() || empty != self.tail.is_none() {
            return false;
        }

        let mut visited = 0;
        let mut cursor = self.head;
        let mut last = None;
        while let Some(id) = cursor {
            visited += 1;
            if visited > self.size {
                return false;
            }
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            last = Some(id);
            cursor = node.next;
        }

        visited == self.size && last == self.tail && self.nodes.len() == self.size
    }

    fn chain(&self) -> Chain<'_, T> {
        Chain {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.size,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(ListError::out_of_bounds(index, self.size))
        }
    }

    fn locate(&self, index: usize) -> Option<NodeId> {
        self.chain().nth(index).map(|(id, _)| id)
    }

    fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.next)
    }

    fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.next = next;
        }
    }

    /// Thread `values` as a new sub-chain after `prev`, or at the front when
    /// `prev` is `None`. Size grows once by the number of values linked.
    fn splice_after<I: IntoIterator<Item = T>>(&mut self, prev: Option<NodeId>, values: I) {
        let mut first = None;
        let mut last: Option<NodeId> = None;
        let mut count = 0;

        for value in values {
            let id = self.nodes.alloc(value);
            match last {
                Some(l) => self.link(l, Some(id)),
                None => first = Some(id),
            }
            last = Some(id);
            count += 1;
        }

        let (Some(first), Some(last)) = (first, last) else {
            return;
        };

        let successor = match prev {
            Some(p) => self.next_of(p),
            None => self.head,
        };
        self.link(last, successor);
        match prev {
            Some(p) => self.link(p, Some(first)),
            None => self.head = Some(first),
        }
        if successor.is_none() {
            self.tail = Some(last);
        }
        self.size += count;

        #[cfg(feature = "logging")]
        debug!("Spliced {} nodes, size now {}", count, self.size);
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        LinkedList::add(self, values)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        LinkedList::remove(self, index)
    }

    fn contains<I: IntoIterator<Item = T>>(&self, values: I) -> bool
    where
        T: Eq + Hash,
    {
        LinkedList::contains(self, values)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        LinkedList::swap(self, i, j)
    }

    fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        LinkedList::insert(self, index, values)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        LinkedList::set(self, index, value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain().map(|(_, node)| &node.value))
            .finish()
    }
}
