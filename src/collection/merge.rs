//! Splicing merge and the `+` / `+=` operators.
//!
//! Merging walks both chains once. Nodes of the source list are moved into
//! the target chain; a source node whose element is already present in the
//! target is dropped instead.
//!
//! ```text
//! target: [1] ─► [3] ─► [5]          target: [1] ─► [2] ─► [3] ─► [5] ─► [6]
//!                              merge
//! source: [2] ─► [3] ─► [6]  ──────► source: (empty, duplicate [3] dropped)
//! ```

use std::ops::{Add, AddAssign};
use std::ptr;

use super::list::{Link, SortedList};

const ORDER_INVARIANT_MESSAGE: &str = "merge must leave the chain strictly ascending";

impl<T: Ord> SortedList<T> {
    /// Moves every element of `other` into `self`, leaving `other` empty.
    ///
    /// Elements of `other` that are already present in `self` are dropped.
    /// No element is cloned and no node is allocated. Merging a list into
    /// itself leaves it unchanged. Always returns `true`.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let mut target: SortedList<i32> = [1, 3, 5].into_iter().collect();
    /// let mut source: SortedList<i32> = [2, 3, 6].into_iter().collect();
    ///
    /// assert!(target.merge(&mut source));
    /// assert_eq!(target.to_string(), "12356");
    /// assert!(source.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        self.splice(other.head.take());
        true
    }

    /// Splices a detached, strictly ascending chain into this list.
    fn splice(&mut self, mut source: Link<T>) {
        let mut remaining = self.head.take();
        let mut tail = &mut self.head;

        while let Some(mut incoming) = source {
            source = incoming.next.take();

            while let Some(mut current) =
                remaining.take_if(|current| current.element < incoming.element)
            {
                remaining = current.next.take();
                tail = &mut tail.insert(current).next;
            }

            if remaining
                .as_ref()
                .is_some_and(|current| current.element == incoming.element)
            {
                drop(incoming);
            } else {
                tail = &mut tail.insert(incoming).next;
            }
        }

        *tail = remaining;

        debug_assert!(self.is_strictly_ascending(), "{ORDER_INVARIANT_MESSAGE}");
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

/// Combines two borrowed lists into a new one.
///
/// Both operands are cloned before merging, so neither is modified.
///
/// # Examples
///
/// ```rust
/// use sorted_list::collection::SortedList;
///
/// let left: SortedList<i32> = [1, 2].into_iter().collect();
/// let right: SortedList<i32> = [2, 3].into_iter().collect();
///
/// let union = &left + &right;
/// assert_eq!(union.to_string(), "123");
/// assert_eq!(left.to_string(), "12");
/// assert_eq!(right.to_string(), "23");
/// ```
impl<T: Ord + Clone> Add<&SortedList<T>> for &SortedList<T> {
    type Output = SortedList<T>;

    fn add(self, rhs: &SortedList<T>) -> SortedList<T> {
        let mut result = SortedList::new();
        result.merge(&mut self.clone());
        result.merge(&mut rhs.clone());
        result
    }
}

/// Combines two owned lists, reusing their nodes.
impl<T: Ord> Add for SortedList<T> {
    type Output = Self;

    fn add(mut self, mut rhs: Self) -> Self {
        self.merge(&mut rhs);
        self
    }
}

/// Merges `rhs` into the left-hand side and empties `rhs`.
///
/// # Examples
///
/// ```rust
/// use sorted_list::collection::SortedList;
///
/// let mut target: SortedList<i32> = [1, 2].into_iter().collect();
/// let mut source: SortedList<i32> = [2, 3].into_iter().collect();
///
/// target += &mut source;
/// assert_eq!(target.to_string(), "123");
/// assert!(source.is_empty());
/// ```
impl<T: Ord> AddAssign<&mut SortedList<T>> for SortedList<T> {
    fn add_assign(&mut self, rhs: &mut SortedList<T>) {
        self.merge(rhs);
    }
}

impl<T: Ord> AddAssign for SortedList<T> {
    fn add_assign(&mut self, mut rhs: Self) {
        self.merge(&mut rhs);
    }
}
