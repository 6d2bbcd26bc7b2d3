#![cfg(all(feature = "array-list", feature = "linked-list", feature = "circular-deque"))]
//! Tests for the fail-fast cursor protocol shared by every container.

use linea::collection::Cursor;
use linea::deque::CircularDeque;
use linea::error::CollectionError;
use linea::list::{ArrayList, LinkedList};
use rstest::rstest;

// =============================================================================
// Protocol, checked once per container
// =============================================================================

/// Drains `container` through `cursor`, removing every element, and returns
/// them in visit order.
fn drain_through<C>(mut cursor: C, container: &mut C::Container) -> Vec<C::Item>
where
    C: Cursor,
    C::Item: Clone,
{
    let mut removed = Vec::new();
    while cursor.has_next(container) {
        let visited = cursor.next(container).cloned();
        assert!(visited.is_ok());
        removed.push(cursor.remove(container).unwrap());
    }
    removed
}

#[rstest]
fn test_drain_array_list() {
    let mut list: ArrayList<i32> = (1..=4).collect();
    let cursor = list.cursor();
    assert_eq!(drain_through(cursor, &mut list), vec![1, 2, 3, 4]);
    assert!(list.is_empty());
}

#[rstest]
fn test_drain_linked_list() {
    let mut list: LinkedList<i32> = (1..=4).collect();
    let cursor = list.cursor();
    assert_eq!(drain_through(cursor, &mut list), vec![1, 2, 3, 4]);
    assert!(list.is_empty());
}

#[rstest]
fn test_drain_circular_deque() {
    let mut deque: CircularDeque<i32> = (1..=4).collect();
    let cursor = deque.cursor();
    assert_eq!(drain_through(cursor, &mut deque), vec![1, 2, 3, 4]);
    assert!(deque.is_empty());
}

// =============================================================================
// IllegalState
// =============================================================================

#[rstest]
fn test_remove_before_next_is_illegal() {
    let mut list: ArrayList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();
    assert_eq!(cursor.remove(&mut list), Err(CollectionError::IllegalState));
    assert_eq!(list.size(), 3);
}

#[rstest]
fn test_second_remove_is_illegal() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&list), Ok(&1));
    assert_eq!(cursor.remove(&mut list), Ok(1));
    assert_eq!(cursor.remove(&mut list), Err(CollectionError::IllegalState));
    assert_eq!(list.slice(), vec![2, 3]);
}

#[rstest]
fn test_deque_remove_rules() {
    let mut deque: CircularDeque<i32> = (1..=3).collect();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.remove(&mut deque), Err(CollectionError::IllegalState));
    assert_eq!(cursor.next(&deque), Ok(&1));
    assert_eq!(cursor.remove(&mut deque), Ok(1));
    assert_eq!(cursor.remove(&mut deque), Err(CollectionError::IllegalState));
    assert_eq!(cursor.next(&deque), Ok(&2));
}

// =============================================================================
// NoSuchElement
// =============================================================================

#[rstest]
fn test_exhausted_cursors_report_no_such_element() {
    let array: ArrayList<i32> = ArrayList::new();
    let linked: LinkedList<i32> = (1..=1).collect();
    let deque: CircularDeque<i32> = CircularDeque::new();

    assert_eq!(array.cursor().next(&array), Err(CollectionError::NoSuchElement));

    let mut cursor = linked.cursor();
    assert_eq!(cursor.next(&linked), Ok(&1));
    assert!(!cursor.has_next(&linked));
    assert_eq!(cursor.next(&linked), Err(CollectionError::NoSuchElement));

    assert!(!deque.cursor().has_next(&deque));
    assert_eq!(deque.cursor().next(&deque), Err(CollectionError::NoSuchElement));
}

// =============================================================================
// ConcurrentModification
// =============================================================================

#[rstest]
fn test_array_list_cursor_detects_external_add() {
    let mut list: ArrayList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&list), Ok(&1));
    list.add(4);
    assert_eq!(cursor.next(&list), Err(CollectionError::ConcurrentModification));
    assert_eq!(cursor.remove(&mut list), Err(CollectionError::ConcurrentModification));
}

#[rstest]
fn test_array_list_cursor_ignores_set() {
    let mut list: ArrayList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&list), Ok(&1));
    list.set(1, 20).unwrap();
    assert_eq!(cursor.next(&list), Ok(&20));
}

#[rstest]
fn test_linked_list_cursor_detects_external_removal() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&list), Ok(&1));
    list.remove_last().unwrap();
    assert_eq!(cursor.next(&list), Err(CollectionError::ConcurrentModification));
}

#[rstest]
fn test_linked_list_cursor_survives_own_removals() {
    let mut list: LinkedList<i32> = (1..=6).collect();
    let mut cursor = list.cursor();
    while let Ok(&value) = cursor.next(&list) {
        if value % 3 != 0 {
            cursor.remove(&mut list).unwrap();
        }
    }
    assert_eq!(list.slice(), vec![3, 6]);
}

#[rstest]
fn test_deque_cursor_detects_moved_tail() {
    let mut deque: CircularDeque<i32> = (1..=3).collect();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(&1));
    deque.add_last(4).unwrap();
    assert_eq!(cursor.next(&deque), Err(CollectionError::ConcurrentModification));
}

#[rstest]
fn test_deque_cursor_detects_growth() {
    let mut deque: CircularDeque<i32> = CircularDeque::with_capacity(0);
    for value in 0..7 {
        deque.add_last(value).unwrap();
    }
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(&0));
    deque.add_first(-1).unwrap();
    assert_eq!(deque.capacity(), 16);
    assert_eq!(cursor.next(&deque), Err(CollectionError::ConcurrentModification));
}

#[rstest]
fn test_deque_cursor_remove_near_back_adjusts_fence() {
    let mut deque: CircularDeque<i32> = (1..=5).collect();
    let mut cursor = deque.cursor();
    for _ in 0..4 {
        cursor.next(&deque).unwrap();
    }
    assert_eq!(cursor.remove(&mut deque), Ok(4));
    assert!(cursor.has_next(&deque));
    assert_eq!(cursor.next(&deque), Ok(&5));
    assert!(!cursor.has_next(&deque));
    assert_eq!(deque.slice(), vec![1, 2, 3, 5]);
}

#[rstest]
fn test_deque_cursor_remove_rejects_front_side_removal() {
    let mut deque: CircularDeque<i32> = (1..=6).collect();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(&1));
    assert_eq!(cursor.next(&deque), Ok(&2));
    assert!(deque.remove_first_occurrence(&2));
    assert_eq!(cursor.remove(&mut deque), Err(CollectionError::ConcurrentModification));
    assert_eq!(deque.slice(), vec![1, 3, 4, 5, 6]);
}

#[rstest]
#[case::remove_first(|deque: &mut CircularDeque<i32>| assert_eq!(deque.remove_first(), Ok(1)))]
#[case::add_first(|deque: &mut CircularDeque<i32>| assert_eq!(deque.add_first(0), Ok(())))]
#[case::remove_near_front(|deque: &mut CircularDeque<i32>| assert!(deque.remove(&2)))]
fn test_deque_cursor_detects_front_side_change(#[case] change: fn(&mut CircularDeque<i32>)) {
    let mut deque: CircularDeque<i32> = (1..=6).collect();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(&1));
    let capacity = deque.capacity();
    change(&mut deque);
    assert_eq!(deque.capacity(), capacity);
    assert_eq!(cursor.next(&deque), Err(CollectionError::ConcurrentModification));
    assert_eq!(cursor.remove(&mut deque), Err(CollectionError::ConcurrentModification));
}

#[rstest]
fn test_deque_cursor_survives_own_front_side_removals() {
    let mut deque: CircularDeque<i32> = (1..=6).collect();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(&1));
    assert_eq!(cursor.next(&deque), Ok(&2));
    assert_eq!(cursor.remove(&mut deque), Ok(2));
    assert_eq!(cursor.next(&deque), Ok(&3));
    assert_eq!(cursor.remove(&mut deque), Ok(3));
    assert_eq!(cursor.next(&deque), Ok(&4));
    assert_eq!(deque.slice(), vec![1, 4, 5, 6]);
}
