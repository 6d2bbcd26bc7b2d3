#![cfg(all(feature = "linked-list", feature = "array-list"))]
//! Unit tests for LinkedList.
//!
//! Covers the list, queue, deque and stack faces of the same node chain.

use linea::collection::{Collection, Deque, List, Queue};
use linea::error::CollectionError;
use linea::list::{ArrayList, LinkedList};
use rstest::rstest;

fn list_of(values: &[i32]) -> LinkedList<i32> {
    values.iter().copied().collect()
}

// =============================================================================
// List operations
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert_eq!(list.peek(), None);
}

#[rstest]
fn test_remove_at_middle_splices_neighbors() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove_at(1), Ok(2));
    assert_eq!(list.slice(), vec![1, 3]);
    assert_eq!(list.size(), 2);
    assert_eq!(list.get_first(), Ok(&1));
    assert_eq!(list.get_last(), Ok(&3));
}

/// A heterogeneous sequence as stored by callers mixing value kinds.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Text(&'static str),
    Number(i64),
}

#[rstest]
fn test_remove_at_drains_heterogeneous_values() {
    let mut list = LinkedList::new();
    list.add(Value::Text("1"));
    list.add(Value::Number(2));
    list.add(Value::Text("3"));

    assert_eq!(list.remove_at(0), Ok(Value::Text("1")));
    assert_eq!(list.remove_at(0), Ok(Value::Number(2)));
    assert_eq!(list.remove_at(0), Ok(Value::Text("3")));
    assert_eq!(
        list.remove_at(0),
        Err(CollectionError::IndexOutOfBound { index: 0, size: 0 })
    );
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
#[case(9)]
fn test_get_walks_to_every_position(#[case] index: usize) {
    let list: LinkedList<usize> = (0..10).collect();
    assert_eq!(list.get(index), Ok(&index));
}

#[rstest]
fn test_set_returns_previous_element() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.set(2, 30), Ok(3));
    assert_eq!(list.get(2), Ok(&30));
    assert_eq!(list.get_last(), Ok(&30));
}

#[rstest]
#[case(0, vec![9, 1, 2])]
#[case(1, vec![1, 9, 2])]
#[case(2, vec![1, 2, 9])]
fn test_add_at_positions(#[case] index: usize, #[case] expected: Vec<i32>) {
    let mut list = list_of(&[1, 2]);
    assert_eq!(list.add_at(index, 9), Ok(()));
    assert_eq!(list.slice(), expected);
}

#[rstest]
fn test_positional_errors() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(
        list.get(2),
        Err(CollectionError::IndexOutOfBound { index: 2, size: 2 })
    );
    assert_eq!(
        list.set(5, 0),
        Err(CollectionError::IndexOutOfBound { index: 5, size: 2 })
    );
    assert_eq!(
        list.add_at(3, 0),
        Err(CollectionError::IndexOutOfBound { index: 3, size: 2 })
    );
    assert_eq!(list.slice(), vec![1, 2]);
}

#[rstest]
fn test_index_of_from_both_ends() {
    let list = list_of(&[5, 6, 5, 7]);
    assert_eq!(list.index_of(&5), Some(0));
    assert_eq!(list.last_index_of(&5), Some(2));
    assert_eq!(list.last_index_of(&7), Some(3));
    assert_eq!(list.index_of(&8), None);
    assert_eq!(list.last_index_of(&8), None);
}

#[rstest]
fn test_option_elements_are_ordinary_values() {
    let mut list: LinkedList<Option<&str>> = LinkedList::new();
    list.add_last(None);
    list.add_last(Some("x"));
    list.add_last(None);
    assert_eq!(list.index_of(&None), Some(0));
    assert_eq!(list.last_index_of(&None), Some(2));
    assert!(list.remove_last_occurrence(&None));
    assert_eq!(list.slice(), vec![None, Some("x")]);
}

// =============================================================================
// Deque and stack operations
// =============================================================================

#[rstest]
fn test_add_first_and_add_last() {
    let mut list = LinkedList::new();
    list.add_last(2);
    list.add_first(1);
    list.add_last(3);
    assert_eq!(list.slice(), vec![1, 2, 3]);
}

#[rstest]
fn test_remove_ends() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(list.remove_last(), Ok(2));
    assert_eq!(list.remove_first(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.remove_last(), Err(CollectionError::NoSuchElement));
}

#[rstest]
fn test_empty_accessors() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.get_first(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.get_last(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.element(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.delete(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.pop(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.poll(), None);
    assert_eq!(list.peek(), None);
}

#[rstest]
fn test_push_front_pop_back() {
    let mut list = LinkedList::new();
    list.push(1);
    list.push(2);
    list.push(3);
    assert_eq!(list.slice(), vec![3, 2, 1]);
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.pop(), Ok(2));
    assert_eq!(list.pop(), Ok(3));
}

#[rstest]
fn test_queue_round_trip() {
    let mut list = LinkedList::new();
    assert!(list.offer("a"));
    assert!(list.offer("b"));
    assert_eq!(list.peek(), Some(&"a"));
    assert_eq!(list.element(), Ok(&"a"));
    assert_eq!(list.poll(), Some("a"));
    assert_eq!(list.delete(), Ok("b"));
    assert!(list.is_empty());
}

#[rstest]
fn test_remove_occurrences() {
    let mut list = list_of(&[1, 2, 3, 2, 1]);
    assert!(list.remove_first_occurrence(&2));
    assert_eq!(list.slice(), vec![1, 3, 2, 1]);
    assert!(list.remove_last_occurrence(&1));
    assert_eq!(list.slice(), vec![1, 3, 2]);
    assert!(list.remove(&3));
    assert!(!list.remove(&3));
    assert_eq!(list.slice(), vec![1, 2]);
}

#[rstest]
fn test_descending_iter() {
    let list = list_of(&[1, 2, 3]);
    let descending: Vec<i32> = list.descending_iter().copied().collect();
    assert_eq!(descending, vec![3, 2, 1]);
}

#[rstest]
fn test_iter_meets_in_the_middle() {
    let list = list_of(&[1, 2, 3, 4, 5]);
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

// =============================================================================
// Bulk operations
// =============================================================================

#[rstest]
fn test_add_all_at_splices_batch() {
    let mut list = list_of(&[1, 5]);
    assert_eq!(list.add_all_at(1, &ArrayList::from(vec![2, 3, 4])), Ok(true));
    assert_eq!(list.slice(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.get_first(), Ok(&1));
    assert_eq!(list.get_last(), Ok(&5));
}

#[rstest]
fn test_add_all_at_validates_before_modifying() {
    let mut list = list_of(&[1]);
    assert_eq!(
        list.add_all_at(2, &vec![2]),
        Err(CollectionError::IndexOutOfBound { index: 2, size: 1 })
    );
    assert_eq!(list.add_all_at(0, &Vec::new()), Ok(false));
    assert_eq!(list.slice(), vec![1]);
}

#[rstest]
fn test_add_all_appends_snapshot_of_self() {
    let mut list = list_of(&[1, 2]);
    let snapshot = list.clone();
    assert!(list.add_all(&snapshot));
    assert_eq!(list.slice(), vec![1, 2, 1, 2]);
    assert_eq!(list.get_last(), Ok(&2));
}

#[rstest]
fn test_remove_all_and_retain_all() {
    let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
    assert!(list.remove_all(&vec![2, 4]));
    assert_eq!(list.slice(), vec![1, 3, 5, 6]);
    assert!(list.retain_all(&vec![1, 6, 9]));
    assert_eq!(list.slice(), vec![1, 6]);
    assert!(!list.retain_all(&vec![1, 6]));
    assert!(!list.remove_all(&vec![7]));
}

#[rstest]
fn test_bulk_idempotence_with_self_snapshot() {
    let mut list = list_of(&[1, 2, 3]);
    let snapshot = list.clone();
    assert!(!list.retain_all(&snapshot));
    assert_eq!(list.size(), 3);
    assert!(list.remove_all(&snapshot));
    assert!(list.is_empty());
}

#[rstest]
fn test_contains_all() {
    let list = list_of(&[1, 2, 3]);
    assert!(list.contains_all(&vec![1, 3]));
    assert!(!list.contains_all(&vec![0]));
    assert!(list.contains_all(&list));
}

#[rstest]
fn test_sub_list() {
    let list = list_of(&[1, 2, 3, 4]);
    assert_eq!(list.sub_list(1, 3).map(|sub| sub.slice()), Ok(vec![2, 3]));
    assert_eq!(
        list.sub_list(0, 5),
        Err(CollectionError::IndexOutOfBound { index: 5, size: 4 })
    );
    assert_eq!(
        list.sub_list(3, 2),
        Err(CollectionError::IndexOutOfBound { index: 3, size: 4 })
    );
}

#[rstest]
fn test_clear_then_reuse() {
    let mut list = list_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    list.add(4);
    assert_eq!(list.slice(), vec![4]);
}

// =============================================================================
// Equality and trait surface
// =============================================================================

#[rstest]
fn test_equals_independently_built_lists() {
    let mut left = LinkedList::new();
    let mut right = LinkedList::new();
    for value in [1, 2, 3] {
        left.add_last(value);
    }
    for value in [3, 2, 1] {
        right.add_first(value);
    }
    assert!(left.equals(&right));
    assert_eq!(left, right);
    right.add(4);
    assert!(!left.equals(&right));
}

#[rstest]
fn test_equals_array_list() {
    let linked = list_of(&[1, 2]);
    let array: ArrayList<i32> = vec![1, 2].into();
    assert!(linked.equals(&array));
    assert!(array.equals(&linked));
}

#[rstest]
fn test_deque_trait_pop_takes_back() {
    let mut list = list_of(&[1, 2, 3]);
    let deque: &mut dyn Deque<i32> = &mut list;
    assert_eq!(deque.push(0), Ok(()));
    assert_eq!(deque.pop(), Ok(3));
    assert_eq!(deque.get_first(), Ok(&0));
    assert_eq!(deque.size(), 3);
}

#[rstest]
fn test_queue_trait_offer() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(Queue::offer(&mut list, 1), Ok(true));
    assert_eq!(Queue::poll(&mut list), Some(1));
}

#[rstest]
fn test_list_trait_add_at() {
    let mut list = list_of(&[1, 3]);
    assert_eq!(List::add_at(&mut list, 1, 2), Ok(()));
    assert_eq!(List::last_index_of(&list, &3), Some(2));
    assert_eq!(Collection::slice(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_hash_matches_for_equal_lists() {
    use std::hash::{BuildHasher, RandomState};

    let state = RandomState::new();
    let left = list_of(&[1, 2, 3]);
    let right: LinkedList<i32> = left.iter().copied().collect();
    assert_eq!(state.hash_one(&left), state.hash_one(&right));
}
