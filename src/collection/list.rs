//! Sorted, duplicate-free singly-linked list.
//!
//! This module provides [`SortedList`], the chain of uniquely owned nodes
//! behind the collection API.
//!
//! # Overview
//!
//! - O(n) insert, remove and lookup (linear scan from the head)
//! - O(n) size (the chain is walked, no length is cached)
//! - O(1) emptiness check
//! - O(n + m) merge by splicing (see the `merge` module)
//!
//! # Examples
//!
//! ```rust
//! use sorted_list::collection::SortedList;
//!
//! let mut list = SortedList::new();
//! list.insert(20);
//! list.insert(10);
//! list.insert(30);
//!
//! let collected: Vec<&i32> = list.iter().collect();
//! assert_eq!(collected, vec![&10, &20, &30]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// Owning link to the next node of a chain.
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// Internal node structure for the sorted list.
///
/// A node owns its element and, through `next`, the rest of the chain.
pub(super) struct Node<T> {
    /// The element stored in this node.
    pub(super) element: T,
    /// The successor node (if any).
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(super) fn boxed(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { element, next })
    }
}

/// A sorted, duplicate-free singly-linked list.
///
/// Elements are kept in strictly ascending order according to `Ord`. An
/// element equal to one already stored is never inserted twice.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(n)       |
/// | `remove`     | O(n)       |
/// | `peek`       | O(n)       |
/// | `len`        | O(n)       |
/// | `is_empty`   | O(1)       |
/// | `merge`      | O(n + m)   |
/// | `clone`      | O(n)       |
/// | `clone_from` | O(n²)      |
///
/// # Examples
///
/// ```rust
/// use sorted_list::collection::SortedList;
///
/// let list: SortedList<i32> = [3, 1, 2, 3].into_iter().collect();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_string(), "123");
/// ```
pub struct SortedList<T> {
    /// The first node of the chain (if any).
    pub(super) head: Link<T>,
}

impl<T> SortedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let list: SortedList<i32> = SortedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(n) - the chain is traversed on every call
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let list: SortedList<i32> = (1..=3).collect();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let list: SortedList<char> = "cab".chars().collect();
    /// let collected: String = list.iter().collect();
    /// assert_eq!(collected, "abc");
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Looks up the element equal to `target`.
    ///
    /// The scan compares with `==` only and walks the whole chain when the
    /// element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let list: SortedList<String> = ["apple".to_string()].into_iter().collect();
    /// assert_eq!(list.peek("apple").map(String::as_str), Some("apple"));
    /// assert_eq!(list.peek("cherry"), None);
    /// ```
    pub fn peek<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter()
            .find(|element| Borrow::<Q>::borrow(*element) == target)
    }

    /// Returns a copy of the element equal to `target`.
    pub fn peek_cloned<Q>(&self, target: &Q) -> Option<T>
    where
        T: Borrow<Q> + Clone,
        Q: PartialEq + ?Sized,
    {
        self.peek(target).cloned()
    }

    /// Returns `true` if an element equal to `target` is stored.
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.peek(target).is_some()
    }

    /// Unlinks the element equal to `target` and returns it.
    ///
    /// Returns `None` and leaves the list untouched if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let mut list: SortedList<i32> = (1..=3).collect();
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&2), None);
    /// assert_eq!(list.to_string(), "13");
    /// ```
    pub fn remove<Q>(&mut self, target: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| Borrow::<Q>::borrow(&node.element) != target)
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let node = cursor.take()?;
        let Node { element, next } = *node;
        *cursor = next;
        Some(element)
    }

    /// Removes and returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let mut list: SortedList<i32> = [2, 1].into_iter().collect();
    /// assert_eq!(list.pop_first(), Some(1));
    /// assert_eq!(list.pop_first(), Some(2));
    /// assert_eq!(list.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { element, next } = *node;
            self.head = next;
            element
        })
    }

    /// Drops every node. Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        // Unlink one node at a time so long chains are not dropped recursively.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Ord> SortedList<T> {
    /// Inserts `element` at its sorted position.
    ///
    /// Returns `false` without touching the list when an equal element is
    /// already stored; `element` is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert!(list.insert(2));
    /// assert!(list.insert(1));
    /// assert!(!list.insert(2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.element < element) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        if cursor.as_ref().is_some_and(|node| node.element == element) {
            return false;
        }

        let next = cursor.take();
        *cursor = Some(Node::boxed(element, next));
        true
    }

    /// Inserts an element that may be absent.
    ///
    /// `None` is rejected with `false` before anything is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::collection::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert!(!list.insert_optional(None));
    /// assert!(list.insert_optional(Some(7)));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert_optional(&mut self, element: Option<T>) -> bool {
        element.is_some_and(|element| self.insert(element))
    }

    /// Returns `true` if every adjacent pair is strictly ascending.
    pub(super) fn is_strictly_ascending(&self) -> bool {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(previous, next)| previous < next)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`SortedList`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.element
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over elements of a [`SortedList`].
///
/// Elements are yielded in ascending order; each node is dropped as its
/// element is moved out.
pub struct IntoIter<T> {
    list: SortedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Deep copy.
///
/// `clone` allocates a fresh node per element and links them in source
/// order. `clone_from` is the assignment form: the destination is cleared
/// and every source element is re-inserted through [`SortedList::insert`].
impl<T: Clone + Ord> Clone for SortedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        for element in self {
            tail = &mut tail.insert(Node::boxed(element.clone(), None)).next;
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        if std::ptr::eq(self, source) {
            return;
        }

        self.clear();
        for element in source {
            self.insert(element.clone());
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two lists are equal when they hold pairwise equal elements and end at
/// the same node count.
impl<T: PartialEq> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T: Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders every element in order with no separators.
impl<T: fmt::Display> fmt::Display for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedListVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = SortedList::new();
        while let Some(element) = seq.next_element()? {
            list.insert(element);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedList<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
