//! Sorted, duplicate-free linked collections.
//!
//! This module provides [`SortedList`], a singly-linked list that keeps its
//! elements in strictly ascending order and never stores two equal elements.
//!
//! # Ownership
//!
//! Each node is a `Box` owned either by the list's head or by its
//! predecessor, so every node belongs to exactly one list at a time:
//!
//! ```text
//! head ──► [1] ──► [3] ──► [5] ──► None
//! ```
//!
//! Copying (`Clone`, `clone_from`) allocates fresh nodes. Merging moves the
//! source list's boxes into the target chain and leaves the source empty.
//!
//! # Examples
//!
//! ```rust
//! use sorted_list::collection::SortedList;
//!
//! let mut list = SortedList::new();
//! assert!(list.insert(3));
//! assert!(list.insert(1));
//! assert!(!list.insert(3)); // duplicate rejected
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.peek(&3), Some(&3));
//! assert_eq!(list.remove(&1), Some(1));
//! assert_eq!(list.remove(&1), None);
//! ```
//!
//! ## Merging
//!
//! ```rust
//! use sorted_list::collection::SortedList;
//!
//! let left: SortedList<i32> = [1, 2].into_iter().collect();
//! let right: SortedList<i32> = [2, 3].into_iter().collect();
//!
//! // Combining borrowed lists copies both operands
//! let union = &left + &right;
//! assert_eq!(union.to_string(), "123");
//! assert_eq!(left.len(), 2);
//! assert_eq!(right.len(), 2);
//!
//! // Merging in place moves nodes out of the right-hand side
//! let mut target = left.clone();
//! let mut source = right.clone();
//! target += &mut source;
//! assert_eq!(target, union);
//! assert!(source.is_empty());
//! ```

mod list;
mod merge;

pub use list::IntoIter;
pub use list::Iter;
pub use list::SortedList;
