//! Error types for list operations

/// Errors that can occur during list operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid range for the operation
    #[cfg_attr(feature = "std", error("Index {index} out of bounds for list of size {size}"))]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The list size at the time of the request.
        size: usize,
    },

    /// Operation needs at least one element
    #[cfg_attr(feature = "std", error("List is empty"))]
    EmptyList,

    /// Search over a non-empty list found no match
    #[cfg_attr(feature = "std", error("Element not found"))]
    ElementNotFound,
}

impl ListError {
    /// Shorthand for an out-of-bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        ListError::IndexOutOfBounds { index, size }
    }

    /// Check if this is an `IndexOutOfBounds` error, whatever its payload
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ListError::IndexOutOfBounds { .. })
    }
}
