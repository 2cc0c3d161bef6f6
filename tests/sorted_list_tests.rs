//! Unit tests for SortedList.
//!
//! These tests exercise the public API: insertion, lookup, removal,
//! merging, copying, equality and rendering.

#![cfg(feature = "collection")]

use sorted_list::collection::SortedList;
use rstest::rstest;

fn collect(list: &SortedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[rstest]
fn test_new_creates_empty_list() {
    let list: SortedList<i32> = SortedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.to_string(), "");
}

#[rstest]
fn test_default_creates_empty_list() {
    let list: SortedList<String> = SortedList::default();
    assert!(list.is_empty());
}

#[rstest]
fn test_insert_keeps_ascending_order() {
    let mut list = SortedList::new();
    for element in [5, 1, 4, 2, 3] {
        assert!(list.insert(element));
    }
    assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_insert_same_value_twice_is_idempotent() {
    let mut list = SortedList::new();
    assert!(list.insert(42));
    let size = list.len();

    assert!(!list.insert(42));
    assert_eq!(list.len(), size);
}

#[rstest]
fn test_insert_then_remove_round_trip() {
    let mut list: SortedList<i32> = [10, 30].into_iter().collect();
    let size = list.len();

    assert!(list.insert(20));
    assert_eq!(list.remove(&20), Some(20));
    assert_eq!(list.len(), size);
}

#[rstest]
fn test_peek_returns_copy_without_mutation() {
    let list: SortedList<i32> = (1..=5).collect();
    assert_eq!(list.peek_cloned(&4), Some(4));
    assert_eq!(list.peek(&6), None);
    assert_eq!(list.len(), 5);
}

#[rstest]
fn test_merge_example_from_two_lists() {
    let mut first: SortedList<i32> = [1, 3, 5].into_iter().collect();
    let mut second: SortedList<i32> = [2, 3, 6].into_iter().collect();

    assert!(first.merge(&mut second));

    assert_eq!(collect(&first), vec![1, 2, 3, 5, 6]);
    assert_eq!(second.len(), 0);
}

#[rstest]
fn test_merge_with_own_copy_leaves_list_unchanged() {
    let mut list: SortedList<i32> = (1..=3).collect();
    let mut copy = list.clone();

    assert!(list.merge(&mut copy));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_merged_list_accepts_further_inserts() {
    let mut first: SortedList<i32> = [2, 8].into_iter().collect();
    let mut second: SortedList<i32> = [4, 6].into_iter().collect();
    first += &mut second;

    assert!(first.insert(5));
    assert!(second.insert(1));

    assert_eq!(collect(&first), vec![2, 4, 5, 6, 8]);
    assert_eq!(collect(&second), vec![1]);
}

#[rstest]
fn test_combine_leaves_operands_unchanged() {
    let left: SortedList<i32> = [1, 2].into_iter().collect();
    let right: SortedList<i32> = [2, 3].into_iter().collect();

    let union = &left + &right;

    assert_eq!(collect(&union), vec![1, 2, 3]);
    assert_eq!(collect(&left), vec![1, 2]);
    assert_eq!(collect(&right), vec![2, 3]);
}

#[rstest]
fn test_equality_independent_of_insertion_order() {
    let left: SortedList<i32> = [7, 3, 5].into_iter().collect();
    let right: SortedList<i32> = [5, 7, 3].into_iter().collect();
    assert_eq!(left, right);
}

#[rstest]
fn test_lists_of_different_sizes_are_unequal() {
    let left: SortedList<i32> = [1, 2].into_iter().collect();
    let right: SortedList<i32> = [1, 2, 3].into_iter().collect();
    assert_ne!(left, right);
}

#[rstest]
fn test_clone_is_deep_copy() {
    let mut original: SortedList<String> = ["b", "a", "c"].into_iter().map(String::from).collect();
    let copy = original.clone();

    assert_eq!(original.remove("a"), Some("a".to_string()));

    assert_eq!(copy.len(), 3);
    assert!(copy.contains("a"));
}

#[rstest]
fn test_clone_from_is_deep_copy() {
    let mut original: SortedList<i32> = (1..=4).collect();
    let mut assigned: SortedList<i32> = [100].into_iter().collect();

    assigned.clone_from(&original);
    original.remove(&1);

    assert_eq!(collect(&assigned), vec![1, 2, 3, 4]);
    assert_eq!(collect(&original), vec![2, 3, 4]);
}

#[rstest]
fn test_display_renders_elements_in_order() {
    let list: SortedList<char> = "dcba".chars().collect();
    assert_eq!(list.to_string(), "abcd");
}

#[rstest]
fn test_hash_consistent_with_equality() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    assert!(seen.insert([1, 2].into_iter().collect::<SortedList<i32>>()));
    assert!(!seen.insert([2, 1].into_iter().collect::<SortedList<i32>>()));
}

#[rstest]
fn test_extend_skips_duplicates() {
    let mut list: SortedList<i32> = (1..=3).collect();
    list.extend([3, 4, 4, 0]);
    assert_eq!(collect(&list), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_for_loop_over_reference() {
    let list: SortedList<i32> = [3, 1, 2].into_iter().collect();
    let mut total = 0;
    for element in &list {
        total += element;
    }
    assert_eq!(total, 6);
}
