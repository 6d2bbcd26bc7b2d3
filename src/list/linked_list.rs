//! Doubly-linked list usable as a list, queue and deque.
//!
//! This module provides [`LinkedList`] and [`LinkedListCursor`].
//!
//! # Overview
//!
//! - O(1) insertion and removal at both ends
//! - O(min(i, n − i)) positional access: lookups walk from whichever end is
//!   closer
//! - O(1) splice once the node is found
//!
//! # Node Storage
//!
//! Nodes live in an arena owned by the list and refer to each other through
//! stable handles instead of pointers:
//!
//! ```text
//! first ─▶ [0: a] ⇄ [3: b] ⇄ [1: c] ◀─ last        vacant: [2]
//! ```
//!
//! Unlinking a node vacates its slot (dropping its links and handing its
//! element back to the caller) and queues the slot for reuse. A node is never
//! relinked after being unlinked; moving an element means removing it and
//! inserting it again as a new node.
//!
//! # Examples
//!
//! ```rust
//! use linea::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_last(2);
//! list.add_last(3);
//! list.add_first(1);
//!
//! assert_eq!(list.slice(), vec![1, 2, 3]);
//! assert_eq!(list.remove_at(1), Ok(2));
//! assert_eq!(list.get_first(), Ok(&1));
//! assert_eq!(list.get_last(), Ok(&3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;

use crate::collection::base::{elements_equal, same_container};
use crate::collection::{Collection, Cursor, Deque, List, Queue};
use crate::error::{CollectionError, Result};

/// Stable handle of a node inside the list's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeIndex(usize);

#[derive(Clone)]
struct Node<T> {
    element: T,
    next: Option<NodeIndex>,
    prev: Option<NodeIndex>,
}

/// A doubly-linked list.
///
/// Permits every `T`, including `Option` values, so "none" can be stored as an
/// ordinary element.
///
/// # Invariants
///
/// - `first`'s `prev` and `last`'s `next` are `None`
/// - following `next` from `first` visits exactly `size` nodes and ends at
///   `last`
/// - `size == 0` iff `first` and `last` are both `None`
///
/// # Time Complexity
///
/// | Operation                   | Complexity        |
/// |-----------------------------|-------------------|
/// | `add_first`/`add_last`      | O(1)              |
/// | `remove_first`/`remove_last`| O(1)              |
/// | `get`/`set`/`add_at`        | O(min(i, n − i))  |
/// | `index_of`/`remove`         | O(n)              |
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    vacant: Vec<NodeIndex>,
    first: Option<NodeIndex>,
    last: Option<NodeIndex>,
    size: usize,
    modification_count: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert!(list.get_first().is_err());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            vacant: Vec::new(),
            first: None,
            last: None,
            size: 0,
            modification_count: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    // =========================================================================
    // Positional access
    // =========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.checked_node_at(index)?;
        Ok(&self.node(node).element)
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let node = self.checked_node_at(index)?;
        Ok(std::mem::replace(&mut self.node_mut(node).element, element))
    }

    /// Appends `element`. Always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.link_last(element);
        true
    }

    /// Inserts `element` at `index`, splicing it in front of the node
    /// currently there (or appending when `index == size`).
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index <= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = vec![1, 3].into_iter().collect();
    /// list.add_at(1, 2).unwrap();
    /// list.add_at(3, 4).unwrap();
    /// assert_eq!(list.slice(), vec![1, 2, 3, 4]);
    /// ```
    pub fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        self.check_position_index(index)?;
        match self.node_at(index) {
            Some(successor) => self.link_before(element, successor),
            None => self.link_last(element),
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::error::CollectionError;
    /// use linea::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(list.remove_at(0), Ok(2));
    /// assert_eq!(
    ///     list.remove_at(0),
    ///     Err(CollectionError::IndexOutOfBound { index: 0, size: 0 })
    /// );
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self.checked_node_at(index)?;
        Ok(self.unlink(node))
    }

    // =========================================================================
    // Deque operations
    // =========================================================================

    /// Inserts `element` at the front.
    pub fn add_first(&mut self, element: T) {
        self.link_first(element);
    }

    /// Inserts `element` at the back. Equivalent to [`add`](Self::add).
    pub fn add_last(&mut self, element: T) {
        self.link_last(element);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let first = self.first.ok_or(CollectionError::NoSuchElement)?;
        Ok(self.unlink(first))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let last = self.last.ok_or(CollectionError::NoSuchElement)?;
        Ok(self.unlink(last))
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn get_first(&self) -> Result<&T> {
        self.first
            .map(|first| &self.node(first).element)
            .ok_or(CollectionError::NoSuchElement)
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn get_last(&self) -> Result<&T> {
        self.last
            .map(|last| &self.node(last).element)
            .ok_or(CollectionError::NoSuchElement)
    }

    /// Pushes onto the stack represented by this list: inserts at the front.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.add_first(element);
    }

    /// Pops from the stack represented by this list: removes the back
    /// element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.remove_last()
    }

    // =========================================================================
    // Queue operations
    // =========================================================================

    /// Adds `element` as the tail. Always returns `true`.
    #[inline]
    pub fn offer(&mut self, element: T) -> bool {
        self.add(element)
    }

    /// Removes and returns the head, or `None` when empty.
    pub fn poll(&mut self) -> Option<T> {
        self.remove_first().ok()
    }

    /// Returns the head without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.get_first().ok()
    }

    /// Removes and returns the head.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn delete(&mut self) -> Result<T> {
        self.remove_first()
    }

    /// Returns the head without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn element(&self) -> Result<&T> {
        self.get_first()
    }

    // =========================================================================
    // Whole-list operations
    // =========================================================================

    /// Removes every element and releases every node slot.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.vacant.clear();
        self.first = None;
        self.last = None;
        if self.size != 0 {
            self.size = 0;
            self.record_modification();
        }
    }

    /// Returns a front-to-back iterator over references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.first,
            back: self.last,
            remaining: self.size,
        }
    }

    /// Returns a back-to-front iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let reversed: Vec<&i32> = list.descending_iter().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    pub fn descending_iter(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns a fail-fast cursor positioned before the first element.
    #[must_use]
    pub const fn cursor(&self) -> LinkedListCursor<T> {
        LinkedListCursor {
            next: self.first,
            last_returned: None,
            next_index: 0,
            expected_modifications: self.modification_count,
            element: PhantomData,
        }
    }

    // =========================================================================
    // Node plumbing
    // =========================================================================

    fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.nodes[index.0] {
            Some(node) => node,
            None => unreachable!("linked node handle points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.nodes[index.0] {
            Some(node) => node,
            None => unreachable!("linked node handle points at a vacant slot"),
        }
    }

    /// Stores `node` in a vacant slot if one exists, otherwise at the end of
    /// the arena.
    fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        if let Some(index) = self.vacant.pop() {
            tracing::trace!(slot = index.0, "linked list node slot recycled");
            self.nodes[index.0] = Some(node);
            index
        } else {
            self.nodes.push(Some(node));
            NodeIndex(self.nodes.len() - 1)
        }
    }

    /// Returns the handle of the node at `index`, walking from whichever end
    /// is closer.
    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        if index >= self.size {
            return None;
        }
        if index < (self.size >> 1) {
            let mut current = self.first?;
            for _ in 0..index {
                current = self.node(current).next?;
            }
            Some(current)
        } else {
            let mut current = self.last?;
            for _ in index + 1..self.size {
                current = self.node(current).prev?;
            }
            Some(current)
        }
    }

    fn checked_node_at(&self, index: usize) -> Result<NodeIndex> {
        self.node_at(index)
            .ok_or(CollectionError::index_out_of_bound(index, self.size))
    }

    const fn check_position_index(&self, index: usize) -> Result<()> {
        if index <= self.size {
            Ok(())
        } else {
            Err(CollectionError::index_out_of_bound(index, self.size))
        }
    }

    fn link_first(&mut self, element: T) {
        let first = self.first;
        let node = self.allocate(Node {
            element,
            next: first,
            prev: None,
        });
        self.first = Some(node);
        match first {
            Some(first) => self.node_mut(first).prev = Some(node),
            None => self.last = Some(node),
        }
        self.size += 1;
        self.record_modification();
    }

    fn link_last(&mut self, element: T) {
        let last = self.last;
        let node = self.allocate(Node {
            element,
            next: None,
            prev: last,
        });
        self.last = Some(node);
        match last {
            Some(last) => self.node_mut(last).next = Some(node),
            None => self.first = Some(node),
        }
        self.size += 1;
        self.record_modification();
    }

    /// Inserts `element` in front of the linked node `successor`.
    fn link_before(&mut self, element: T, successor: NodeIndex) {
        let prev = self.node(successor).prev;
        let node = self.allocate(Node {
            element,
            next: Some(successor),
            prev,
        });
        self.node_mut(successor).prev = Some(node);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(node),
            None => self.first = Some(node),
        }
        self.size += 1;
        self.record_modification();
    }

    /// Splices the linked node `index` out of the chain, vacates its slot and
    /// returns its element.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let Some(Node {
            element,
            next,
            prev,
        }) = self.nodes[index.0].take()
        else {
            unreachable!("unlink called on a vacant slot");
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.last = prev,
        }
        self.vacant.push(index);
        self.size -= 1;
        self.record_modification();
        element
    }

    #[inline]
    const fn record_modification(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }

    /// Walks the chain in both directions and panics if an invariant is
    /// broken.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.size == 0, self.first.is_none());
        assert_eq!(self.size == 0, self.last.is_none());
        if let Some(first) = self.first {
            assert_eq!(self.node(first).prev, None);
        }
        if let Some(last) = self.last {
            assert_eq!(self.node(last).next, None);
        }

        let mut forward = Vec::new();
        let mut current = self.first;
        while let Some(index) = current {
            forward.push(index);
            assert!(forward.len() <= self.size, "chain longer than size");
            current = self.node(index).next;
        }
        assert_eq!(forward.len(), self.size);
        assert_eq!(forward.last().copied(), self.last);

        let mut backward = Vec::new();
        let mut current = self.last;
        while let Some(index) = current {
            backward.push(index);
            current = self.node(index).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        let occupied = self.nodes.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.size);
        for index in &self.vacant {
            assert!(self.nodes[index.0].is_none());
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns the position of the last element equal to `element`.
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.descending_iter()
            .position(|candidate| candidate == element)
            .map(|from_back| self.size - 1 - from_back)
    }

    /// Returns `true` if some element equals `element`.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`, if present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.remove_first_occurrence(element)
    }

    /// Removes the first element equal to `element`, walking front to back.
    pub fn remove_first_occurrence(&mut self, element: &T) -> bool {
        let mut current = self.first;
        while let Some(index) = current {
            let node = self.node(index);
            if node.element == *element {
                self.unlink(index);
                return true;
            }
            current = node.next;
        }
        false
    }

    /// Removes the last element equal to `element`, walking back to front.
    pub fn remove_last_occurrence(&mut self, element: &T) -> bool {
        let mut current = self.last;
        while let Some(index) = current {
            let node = self.node(index);
            if node.element == *element {
                self.unlink(index);
                return true;
            }
            current = node.prev;
        }
        false
    }

    /// Returns `true` if every element of `other` is present in this list.
    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        if same_container(self, other) {
            return true;
        }
        other.elements().all(|element| self.contains(element))
    }

    /// Removes every element that is also present in `other`.
    ///
    /// Returns `true` if the list was modified.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, false)
    }

    /// Keeps only the elements that are also present in `other`.
    ///
    /// Returns `true` if the list was modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=5).collect();
    /// assert!(list.retain_all(&vec![1, 3, 5, 7]));
    /// assert_eq!(list.slice(), vec![1, 3, 5]);
    /// ```
    pub fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, true)
    }

    /// Walks the list with a cursor, removing through it every element whose
    /// membership in `other` differs from `retain`.
    fn batch_remove<C>(&mut self, other: &C, retain: bool) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let mut cursor = self.cursor();
        let mut modified = false;
        while let Ok(element) = cursor.next(self) {
            if other.contains(element) != retain {
                modified |= cursor.remove(self).is_ok();
            }
        }
        modified
    }

    /// Returns `true` if `other` holds equal elements in the same order.
    ///
    /// A list is always equal to itself.
    pub fn equals<C>(&self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        if same_container(self, other) {
            return true;
        }
        self.size == other.size() && elements_equal(self.iter(), other.elements())
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a list holding a copy of `collection`'s elements in its
    /// iteration order.
    pub fn from_collection<C>(collection: &C) -> Self
    where
        C: Collection<T> + ?Sized,
    {
        collection.elements().cloned().collect()
    }

    /// Appends a copy of every element of `other`, in its iteration order.
    ///
    /// Returns `true` if the list was modified.
    pub fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.splice_at(self.size, other)
    }

    /// Inserts a copy of every element of `other` at `index` as one batch
    /// splice, preserving `other`'s iteration order.
    ///
    /// Returns `Ok(false)` without touching the list when `other` is empty.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index <= size`. The index
    /// is validated before anything is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = vec![1, 5].into_iter().collect();
    /// assert_eq!(list.add_all_at(1, &vec![2, 3, 4]), Ok(true));
    /// assert_eq!(list.slice(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(list.add_all_at(0, &Vec::new()), Ok(false));
    /// ```
    pub fn add_all_at<C>(&mut self, index: usize, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
    {
        self.check_position_index(index)?;
        Ok(self.splice_at(index, other))
    }

    /// Links a snapshot of `other` between the node before `index` and the
    /// node at `index`. `index` must already be a valid position.
    fn splice_at<C>(&mut self, index: usize, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let incoming = other.slice();
        if incoming.is_empty() {
            return false;
        }
        let added = incoming.len();
        let successor = self.node_at(index);
        let mut predecessor = match successor {
            Some(successor) => self.node(successor).prev,
            None => self.last,
        };

        for element in incoming {
            let node = self.allocate(Node {
                element,
                next: None,
                prev: predecessor,
            });
            match predecessor {
                Some(predecessor) => self.node_mut(predecessor).next = Some(node),
                None => self.first = Some(node),
            }
            predecessor = Some(node);
        }

        match successor {
            Some(successor) => {
                if let Some(predecessor) = predecessor {
                    self.node_mut(predecessor).next = Some(successor);
                }
                self.node_mut(successor).prev = predecessor;
            }
            None => self.last = predecessor,
        }
        self.size += added;
        self.record_modification();
        true
    }

    /// Returns a copy of the elements in `[from, to)`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `from <= to <= size`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self> {
        if to > self.size {
            return Err(CollectionError::index_out_of_bound(to, self.size));
        }
        if from > to {
            return Err(CollectionError::index_out_of_bound(from, self.size));
        }
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }

    /// Returns a defensive copy of all elements in order.
    pub fn slice(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A double-ended iterator over references to the elements of a
/// [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.poll()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Cursor
// =============================================================================

/// A fail-fast cursor over a [`LinkedList`].
///
/// Created by [`LinkedList::cursor`].
pub struct LinkedListCursor<T> {
    next: Option<NodeIndex>,
    last_returned: Option<NodeIndex>,
    next_index: usize,
    expected_modifications: usize,
    element: PhantomData<fn() -> T>,
}

impl<T> LinkedListCursor<T> {
    fn check_for_modification(&self, list: &LinkedList<T>) -> Result<()> {
        if self.expected_modifications == list.modification_count {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.expected_modifications,
                actual = list.modification_count,
                "linked list modified behind a live cursor"
            );
            Err(CollectionError::ConcurrentModification)
        }
    }
}

impl<T> Cursor for LinkedListCursor<T> {
    type Container = LinkedList<T>;
    type Item = T;

    #[inline]
    fn has_next(&self, list: &LinkedList<T>) -> bool {
        self.next_index < list.size
    }

    fn next<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T> {
        self.check_for_modification(list)?;
        if self.next_index >= list.size {
            return Err(CollectionError::NoSuchElement);
        }
        let current = self.next.ok_or(CollectionError::NoSuchElement)?;
        let node = list.node(current);
        self.last_returned = Some(current);
        self.next = node.next;
        self.next_index += 1;
        Ok(&node.element)
    }

    fn remove(&mut self, list: &mut LinkedList<T>) -> Result<T> {
        let last_returned = self.last_returned.ok_or(CollectionError::IllegalState)?;
        self.check_for_modification(list)?;
        let element = list.unlink(last_returned);
        self.next_index -= 1;
        self.last_returned = None;
        self.expected_modifications = list.modification_count;
        Ok(element)
    }
}

impl<T> fmt::Debug for LinkedListCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LinkedListCursor")
            .field("next_index", &self.next_index)
            .field("can_remove", &self.last_returned.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Collection Trait Implementations
// =============================================================================

impl<T> Collection<T> for LinkedList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> List<T> for LinkedList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T> {
        Self::set(self, index, element)
    }

    fn add(&mut self, element: T) -> bool {
        Self::add(self, element)
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        Self::add_at(self, index, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        Self::remove_at(self, index)
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Self::index_of(self, element)
    }

    fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Self::last_index_of(self, element)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T> Queue<T> for LinkedList<T> {
    fn offer(&mut self, element: T) -> Result<bool> {
        Ok(Self::offer(self, element))
    }

    fn poll(&mut self) -> Option<T> {
        Self::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        Self::peek(self)
    }

    fn delete(&mut self) -> Result<T> {
        Self::delete(self)
    }

    fn element(&self) -> Result<&T> {
        Self::element(self)
    }
}

/// `pop` removes the back element, so `push`/`pop` pair first-in-first-out.
impl<T> Deque<T> for LinkedList<T> {
    fn add_first(&mut self, element: T) -> Result<()> {
        Self::add_first(self, element);
        Ok(())
    }

    fn add_last(&mut self, element: T) -> Result<()> {
        Self::add_last(self, element);
        Ok(())
    }

    fn remove_first(&mut self) -> Result<T> {
        Self::remove_first(self)
    }

    fn remove_last(&mut self) -> Result<T> {
        Self::remove_last(self)
    }

    fn get_first(&self) -> Result<&T> {
        Self::get_first(self)
    }

    fn get_last(&self) -> Result<&T> {
        Self::get_last(self)
    }

    fn remove_first_occurrence(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Self::remove_first_occurrence(self, element)
    }

    fn remove_last_occurrence(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Self::remove_last_occurrence(self, element)
    }

    fn push(&mut self, element: T) -> Result<()> {
        Self::push(self, element);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        Self::pop(self)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.link_last(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(LinkedList<String>: Send, Sync, Clone);
