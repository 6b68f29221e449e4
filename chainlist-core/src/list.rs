//! The list capability shared by every list variant

use crate::error::ListError;
use crate::Result;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

/// Minimal interface a list variant must satisfy
///
/// Indices are zero-based. Reads and in-place updates accept `[0, size)`,
/// insertion accepts `[0, size]`. Failed calls leave the list untouched.
pub trait List<T> {
    /// Append values to the end, in order
    fn add<I: IntoIterator<Item = T>>(&mut self, values: I);

    /// Borrow the value at `index`
    fn get(&self, index: usize) -> Result<&T>;

    /// Remove the value at `index` and return it
    ///
    /// Fails with [`ListError::EmptyList`] before looking at the index.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Check that every distinct value in `values` is present
    ///
    /// An empty set of values is always contained.
    fn contains<I: IntoIterator<Item = T>>(&self, values: I) -> bool
    where
        T: Eq + Hash;

    /// Exchange the values at `i` and `j`
    fn swap(&mut self, i: usize, j: usize) -> Result<()>;

    /// Splice values, in order, starting at `index`
    fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()>;

    /// Overwrite the value at `index`
    fn set(&mut self, index: usize, value: T) -> Result<()>;
}

/// Array-backed list, used as a reference model for linked variants
///
/// Wraps a `Vec` so the `List` methods do not shadow the slice methods of
/// the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Borrow the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the backing vector
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or(ListError::out_of_bounds(index, self.items.len()))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if self.items.is_empty() {
            return Err(ListError::EmptyList);
        }
        if index >= self.items.len() {
            return Err(ListError::out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    fn contains<I: IntoIterator<Item = T>>(&self, values: I) -> bool
    where
        T: Eq + Hash,
    {
        let wanted: HashSet<T> = values.into_iter().collect();
        wanted.iter().all(|value| self.items.contains(value))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        for index in [i, j] {
            if index >= self.items.len() {
                return Err(ListError::out_of_bounds(index, self.items.len()));
            }
        }
        self.items.swap(i, j);
        Ok(())
    }

    fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        if index > self.items.len() {
            return Err(ListError::out_of_bounds(index, self.items.len()));
        }
        drop(self.items.splice(index..index, values));
        Ok(())
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let size = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ListError::out_of_bounds(index, size))?;
        *slot = value;
        Ok(())
    }
}
