//! # sorted-list
//!
//! A sorted, duplicate-free, singly-linked container.
//!
//! ## Overview
//!
//! [`SortedList`](collection::SortedList) keeps its elements in strictly
//! ascending order and rejects duplicates. Every node is owned by exactly one
//! list, so merging two lists moves nodes from one chain into the other
//! instead of copying them:
//!
//! - **Collection**: insertion, lookup, removal, size, clearing, deep copy,
//!   equality and rendering
//! - **Merge**: linear-time splicing union of two lists, emptying the source
//! - **Sources**: bulk construction from a stream of decoded records
//!
//! ## Feature Flags
//!
//! - `collection`: the [`SortedList`](collection::SortedList) container
//! - `source`: record sources and `build_from*` constructors
//! - `serde`: `Serialize`/`Deserialize` for `SortedList`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_list::prelude::*;
//!
//! let mut odds: SortedList<i32> = [5, 1, 3].into_iter().collect();
//! let mut others: SortedList<i32> = [6, 3, 2].into_iter().collect();
//!
//! assert!(odds.merge(&mut others));
//! assert_eq!(odds.to_string(), "12356");
//! assert!(others.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorted_list::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "source")]
    pub use crate::source::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "source")]
pub mod source;
