//! # Chainlist Core
//!
//! A generic singly-linked list that reports misuse through explicit errors
//! instead of panicking.
//!
//! ## Modules
//!
//! - `error`: Error kinds reported by list operations
//! - `list`: The `List` capability trait and the array-backed `ArrayList`
//! - `node`: Node arena and handles
//! - `singly`: The singly-linked `LinkedList`
//!
//! ## Example
//!
//! ```
//! use chainlist_core::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add([1, 2, 3]);
//! assert_eq!(list.get(0), Ok(&1));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod list;
pub mod node;
pub mod singly;

// Re-export commonly used types
pub use error::ListError;
pub use list::{ArrayList, List};
pub use singly::LinkedList;

/// Result type alias for list operations
pub type Result<T> = core::result::Result<T, ListError>;
