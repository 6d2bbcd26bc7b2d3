//! Resizable circular-buffer deque.
//!
//! This module provides [`CircularDeque`] and [`CircularDequeCursor`].
//!
//! # Layout
//!
//! Elements live in a ring of `capacity` slots, `capacity` always being a
//! power of two so every index wraps with a bitmask:
//!
//! ```text
//!   tail        head
//!    ↓           ↓
//! [ c | _ | _ | a | b ]      capacity 8 shown truncated
//! ```
//!
//! `head` is the slot of the first element, `tail` the slot just past the last
//! one. The slot at `tail` is always empty: the ring doubles as soon as a write
//! makes `head == tail`.
//!
//! # Examples
//!
//! ```rust
//! use linea::deque::CircularDeque;
//!
//! let mut deque: CircularDeque<i32> = (1..=3).collect();
//! deque.push(0).unwrap();
//! assert_eq!(deque.slice(), vec![0, 1, 2, 3]);
//! assert_eq!(deque.pop(), Ok(0));
//! assert_eq!(deque.poll_last(), Some(3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;

use crate::collection::base::{elements_equal, same_container};
use crate::collection::{Collection, Cursor, Deque, Queue, Stack};
use crate::error::{CollectionError, Result};

/// A double-ended queue backed by a growable ring buffer.
///
/// Insertion methods take `impl Into<Option<T>>`: a plain `T` is stored, while
/// `None` is rejected with [`CollectionError::NilElement`] because an empty
/// slot is how the ring marks unused space.
///
/// # Time Complexity
///
/// | Operation                         | Complexity     |
/// |-----------------------------------|----------------|
/// | `add_first`/`add_last`            | O(1) amortized |
/// | `remove_first`/`remove_last`      | O(1)           |
/// | `get_first`/`get_last`            | O(1)           |
/// | `remove_first_occurrence`         | O(n)           |
/// | cursor `remove`                   | O(n)           |
///
/// # Examples
///
/// ```rust
/// use linea::deque::CircularDeque;
/// use linea::error::CollectionError;
///
/// let mut deque: CircularDeque<&str> = CircularDeque::new();
/// deque.add_last("b").unwrap();
/// deque.add_first("a").unwrap();
/// assert_eq!(deque.add_last(None), Err(CollectionError::NilElement));
/// assert_eq!(deque.get_first(), Ok(&"a"));
/// assert_eq!(deque.get_last(), Ok(&"b"));
/// ```
#[derive(Clone)]
pub struct CircularDeque<T> {
    elements: Vec<Option<T>>,
    head: usize,
    tail: usize,
    modification_count: usize,
}

impl<T> CircularDeque<T> {
    /// Capacity of a deque created with [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 16;
    /// Smallest capacity [`with_capacity`](Self::with_capacity) allocates.
    pub const MINIMUM_CAPACITY: usize = 8;
    /// Largest capacity the ring may grow to.
    pub const MAXIMUM_CAPACITY: usize = 1 << 30;

    /// Creates an empty deque with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty deque able to hold `elements` elements without
    /// growing.
    ///
    /// The capacity is the smallest power of two strictly greater than
    /// `elements`, at least [`MINIMUM_CAPACITY`](Self::MINIMUM_CAPACITY) and at
    /// most [`MAXIMUM_CAPACITY`](Self::MAXIMUM_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::deque::CircularDeque;
    ///
    /// assert_eq!(CircularDeque::<i32>::with_capacity(0).capacity(), 8);
    /// assert_eq!(CircularDeque::<i32>::with_capacity(8).capacity(), 16);
    /// assert_eq!(CircularDeque::<i32>::with_capacity(100).capacity(), 128);
    /// ```
    #[must_use]
    pub fn with_capacity(elements: usize) -> Self {
        Self::with_slots(Self::allocation_size(elements))
    }

    fn allocation_size(elements: usize) -> usize {
        if elements < Self::MINIMUM_CAPACITY {
            return Self::MINIMUM_CAPACITY;
        }
        elements
            .checked_add(1)
            .and_then(usize::checked_next_power_of_two)
            .map_or(Self::MAXIMUM_CAPACITY, |capacity| {
                capacity.min(Self::MAXIMUM_CAPACITY)
            })
    }

    fn with_slots(capacity: usize) -> Self {
        Self {
            elements: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            modification_count: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn size(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the number of slots in the ring.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    const fn mask(&self) -> usize {
        self.elements.len() - 1
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `element` at the front.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NilElement`] for `None`,
    /// [`CollectionError::CapacityOverflow`] when the ring is full and already
    /// at [`MAXIMUM_CAPACITY`](Self::MAXIMUM_CAPACITY). Nothing is modified on
    /// error.
    pub fn add_first(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        let element = element.into().ok_or(CollectionError::NilElement)?;
        self.ensure_room()?;
        self.head = self.head.wrapping_sub(1) & self.mask();
        self.elements[self.head] = Some(element);
        self.record_modification();
        if self.head == self.tail {
            self.double_capacity();
        }
        Ok(())
    }

    /// Inserts `element` at the back.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NilElement`] for `None`,
    /// [`CollectionError::CapacityOverflow`] when the ring is full and already
    /// at [`MAXIMUM_CAPACITY`](Self::MAXIMUM_CAPACITY). Nothing is modified on
    /// error.
    pub fn add_last(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        let element = element.into().ok_or(CollectionError::NilElement)?;
        self.ensure_room()?;
        self.elements[self.tail] = Some(element);
        self.tail = (self.tail + 1) & self.mask();
        self.record_modification();
        if self.head == self.tail {
            self.double_capacity();
        }
        Ok(())
    }

    /// Pushes onto the stack represented by this deque: inserts at the front.
    ///
    /// # Errors
    ///
    /// Same as [`add_first`](Self::add_first).
    #[inline]
    pub fn push(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.add_first(element)
    }

    /// Adds `element` as the tail of the queue. Returns `Ok(true)` on success.
    ///
    /// # Errors
    ///
    /// Same as [`add_last`](Self::add_last).
    #[inline]
    pub fn offer(&mut self, element: impl Into<Option<T>>) -> Result<bool> {
        self.add_last(element).map(|()| true)
    }

    /// Fails if the next write would fill the ring and the ring cannot
    /// double.
    fn ensure_room(&self) -> Result<()> {
        if self.size() + 1 < self.capacity() {
            Ok(())
        } else {
            Self::grown_capacity(self.capacity()).map(|_| ())
        }
    }

    fn grown_capacity(capacity: usize) -> Result<usize> {
        let requested = capacity << 1;
        if requested > Self::MAXIMUM_CAPACITY {
            tracing::debug!(capacity, requested, "circular deque at maximum capacity");
            Err(CollectionError::CapacityOverflow { requested })
        } else {
            Ok(requested)
        }
    }

    /// Doubles the ring once it is completely full, laying the elements out
    /// from slot 0.
    fn double_capacity(&mut self) {
        let capacity = self.capacity();
        let mut elements: Vec<Option<T>> = Vec::with_capacity(capacity << 1);
        elements.extend(self.elements.drain(self.head..));
        elements.extend(self.elements.drain(..));
        elements.resize_with(capacity << 1, || None);
        self.elements = elements;
        self.head = 0;
        self.tail = capacity;
        self.record_modification();
        tracing::trace!(
            from = capacity,
            to = capacity << 1,
            "circular deque ring doubled"
        );
    }

    // =========================================================================
    // Removal and access
    // =========================================================================

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let element = self.elements[self.head]
            .take()
            .ok_or(CollectionError::NoSuchElement)?;
        self.head = (self.head + 1) & self.mask();
        self.record_modification();
        Ok(element)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let last = self.tail.wrapping_sub(1) & self.mask();
        let element = self.elements[last]
            .take()
            .ok_or(CollectionError::NoSuchElement)?;
        self.tail = last;
        self.record_modification();
        Ok(element)
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn get_first(&self) -> Result<&T> {
        self.peek().ok_or(CollectionError::NoSuchElement)
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    pub fn get_last(&self) -> Result<&T> {
        self.peek_last().ok_or(CollectionError::NoSuchElement)
    }

    /// Returns the front element, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements[self.head].as_ref()
    }

    /// Returns the back element, or `None` when empty.
    pub fn peek_last(&self) -> Option<&T> {
        self.elements[self.tail.wrapping_sub(1) & self.mask()].as_ref()
    }

    /// Removes and returns the front element, or `None` when empty.
    pub fn poll(&mut self) -> Option<T> {
        self.remove_first().ok()
    }

    /// Removes and returns the back element, or `None` when empty.
    pub fn poll_last(&mut self) -> Option<T> {
        self.remove_last().ok()
    }

    /// Pops from the stack represented by this deque: removes the front
    /// element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.remove_first()
    }

    /// Removes and returns the head of the queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn delete(&mut self) -> Result<T> {
        self.remove_first()
    }

    /// Returns the head of the queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    #[inline]
    pub fn element(&self) -> Result<&T> {
        self.get_first()
    }

    /// Removes every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.elements.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.record_modification();
    }

    /// Returns a front-to-back iterator over references to the elements.
    ///
    /// The iterator is double-ended; `iter().rev()` walks back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            elements: &self.elements,
            head: self.head,
            tail: self.tail,
        }
    }

    /// Returns a fail-fast cursor positioned before the first element.
    #[must_use]
    pub fn cursor(&self) -> CircularDequeCursor<T> {
        CircularDequeCursor {
            cursor: self.head,
            fence: self.tail,
            capacity: self.capacity(),
            expected_modifications: self.modification_count,
            last_returned: None,
            element: PhantomData,
        }
    }

    /// Removes the element at ring slot `index`, closing the gap by shifting
    /// whichever side of it is shorter.
    ///
    /// Returns the element and `true` if the back side moved (so `tail`
    /// retreated), `false` if the front side moved (so `head` advanced).
    fn delete_at(&mut self, index: usize) -> Result<(T, bool)> {
        let mask = self.mask();
        let front = index.wrapping_sub(self.head) & mask;
        let back = self.tail.wrapping_sub(index) & mask;

        if front >= self.size() {
            tracing::debug!(
                index,
                head = self.head,
                tail = self.tail,
                "circular deque slot no longer holds a live element"
            );
            return Err(CollectionError::ConcurrentModification);
        }
        let element = self.elements[index]
            .take()
            .ok_or(CollectionError::ConcurrentModification)?;

        if front < back {
            let mut slot = index;
            while slot != self.head {
                let previous = slot.wrapping_sub(1) & mask;
                self.elements.swap(slot, previous);
                slot = previous;
            }
            self.head = (self.head + 1) & mask;
            self.record_modification();
            Ok((element, false))
        } else {
            let last = self.tail.wrapping_sub(1) & mask;
            let mut slot = index;
            while slot != last {
                let following = (slot + 1) & mask;
                self.elements.swap(slot, following);
                slot = following;
            }
            self.tail = last;
            self.record_modification();
            Ok((element, true))
        }
    }

    #[inline]
    const fn record_modification(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }
}

impl<T: PartialEq> CircularDeque<T> {
    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|candidate| candidate == element)
    }

    /// Removes the first element equal to `element`, if present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.remove_first_occurrence(element)
    }

    /// Removes the first element equal to `element`, walking front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::deque::CircularDeque;
    ///
    /// let mut deque: CircularDeque<i32> = vec![1, 2, 1, 2].into_iter().collect();
    /// assert!(deque.remove_first_occurrence(&2));
    /// assert_eq!(deque.slice(), vec![1, 1, 2]);
    /// assert!(!deque.remove_first_occurrence(&3));
    /// ```
    pub fn remove_first_occurrence(&mut self, element: &T) -> bool {
        let mask = self.mask();
        let mut slot = self.head;
        while slot != self.tail {
            if self.elements[slot].as_ref() == Some(element) {
                return self.delete_at(slot).is_ok();
            }
            slot = (slot + 1) & mask;
        }
        false
    }

    /// Removes the last element equal to `element`, walking back to front.
    pub fn remove_last_occurrence(&mut self, element: &T) -> bool {
        let mask = self.mask();
        let mut slot = self.tail;
        while slot != self.head {
            slot = slot.wrapping_sub(1) & mask;
            if self.elements[slot].as_ref() == Some(element) {
                return self.delete_at(slot).is_ok();
            }
        }
        false
    }

    /// Returns `true` if every element of `other` is present in this deque.
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
    /// Returns `true` if the deque was modified.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, false)
    }

    /// Keeps only the elements that are also present in `other`.
    ///
    /// Returns `true` if the deque was modified.
    pub fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, true)
    }

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

    /// Returns `true` if `other` holds equal elements in the same head-to-tail
    /// order.
    pub fn equals<C>(&self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        if same_container(self, other) {
            return true;
        }
        self.size() == other.size() && elements_equal(self.iter(), other.elements())
    }
}

impl<T: Clone> CircularDeque<T> {
    /// Appends a copy of every element of `other` at the back, in its
    /// iteration order.
    ///
    /// Returns `Ok(true)` if the deque was modified.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] when the combined elements cannot
    /// fit under [`MAXIMUM_CAPACITY`](Self::MAXIMUM_CAPACITY). The check runs
    /// before anything is added.
    pub fn add_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
    {
        let incoming = other.slice();
        let required = self.size() + incoming.len();
        if required >= Self::MAXIMUM_CAPACITY {
            tracing::debug!(required, "circular deque at maximum capacity");
            return Err(CollectionError::CapacityOverflow {
                requested: required + 1,
            });
        }
        let modified = !incoming.is_empty();
        for element in incoming {
            self.add_last(element)?;
        }
        Ok(modified)
    }

    /// Returns a copy of the elements in head-to-tail order.
    pub fn slice(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A double-ended iterator over references to the elements of a
/// [`CircularDeque`].
pub struct Iter<'a, T> {
    elements: &'a [Option<T>],
    head: usize,
    tail: usize,
}

impl<T> Iter<'_, T> {
    const fn mask(&self) -> usize {
        self.elements.len() - 1
    }

    const fn remaining(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let element = self.elements[self.head].as_ref();
        self.head = (self.head + 1) & self.mask();
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail = self.tail.wrapping_sub(1) & self.mask();
        self.elements[self.tail].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`CircularDeque`].
pub struct IntoIter<T> {
    deque: CircularDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.poll()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.deque.size();
        (size, Some(size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.poll_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Cursor
// =============================================================================

/// A fail-fast cursor over a [`CircularDeque`].
///
/// The cursor remembers the deque's `tail` (its fence), its capacity and its
/// modification count when it was created. A structural change at either end
/// that the cursor did not make itself is reported as
/// [`CollectionError::ConcurrentModification`].
pub struct CircularDequeCursor<T> {
    cursor: usize,
    fence: usize,
    capacity: usize,
    expected_modifications: usize,
    last_returned: Option<usize>,
    element: PhantomData<fn() -> T>,
}

impl<T> CircularDequeCursor<T> {
    fn check_for_modification(&self, deque: &CircularDeque<T>) -> Result<()> {
        if deque.tail == self.fence
            && deque.capacity() == self.capacity
            && deque.modification_count == self.expected_modifications
        {
            Ok(())
        } else {
            tracing::debug!(
                fence = self.fence,
                tail = deque.tail,
                expected = self.expected_modifications,
                actual = deque.modification_count,
                "circular deque modified behind a live cursor"
            );
            Err(CollectionError::ConcurrentModification)
        }
    }
}

impl<T> Cursor for CircularDequeCursor<T> {
    type Container = CircularDeque<T>;
    type Item = T;

    #[inline]
    fn has_next(&self, _deque: &CircularDeque<T>) -> bool {
        self.cursor != self.fence
    }

    fn next<'a>(&mut self, deque: &'a CircularDeque<T>) -> Result<&'a T> {
        self.check_for_modification(deque)?;
        if self.cursor == self.fence {
            return Err(CollectionError::NoSuchElement);
        }
        let element = deque.elements[self.cursor]
            .as_ref()
            .ok_or(CollectionError::ConcurrentModification)?;
        self.last_returned = Some(self.cursor);
        self.cursor = (self.cursor + 1) & deque.mask();
        Ok(element)
    }

    fn remove(&mut self, deque: &mut CircularDeque<T>) -> Result<T> {
        let last_returned = self.last_returned.ok_or(CollectionError::IllegalState)?;
        self.check_for_modification(deque)?;
        let (element, back_moved) = deque.delete_at(last_returned)?;
        if back_moved {
            self.cursor = self.cursor.wrapping_sub(1) & deque.mask();
            self.fence = deque.tail;
        }
        self.expected_modifications = deque.modification_count;
        self.last_returned = None;
        Ok(element)
    }
}

impl<T> fmt::Debug for CircularDequeCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CircularDequeCursor")
            .field("cursor", &self.cursor)
            .field("fence", &self.fence)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Collection Trait Implementations
// =============================================================================

impl<T> Collection<T> for CircularDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Queue<T> for CircularDeque<T> {
    fn offer(&mut self, element: T) -> Result<bool> {
        Self::offer(self, element)
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

/// `pop` removes the front element, so `push`/`pop` pair last-in-first-out.
impl<T> Deque<T> for CircularDeque<T> {
    fn add_first(&mut self, element: T) -> Result<()> {
        Self::add_first(self, element)
    }

    fn add_last(&mut self, element: T) -> Result<()> {
        Self::add_last(self, element)
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
        Self::push(self, element)
    }

    fn pop(&mut self) -> Result<T> {
        Self::pop(self)
    }
}

/// The top of the stack is the front of the deque.
impl<T> Stack<T> for CircularDeque<T> {
    fn push(&mut self, element: T) -> Result<()> {
        Self::push(self, element)
    }

    fn pop(&mut self) -> Result<T> {
        Self::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        Self::get_first(self)
    }

    fn clean(&mut self) {
        Self::clear(self);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CircularDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let presize = iter.size_hint().0.min(Self::DEFAULT_CAPACITY);
        let mut deque = Self::with_capacity(presize);
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for CircularDeque<T> {
    /// # Panics
    ///
    /// Panics if the deque would outgrow
    /// [`MAXIMUM_CAPACITY`](CircularDeque::MAXIMUM_CAPACITY).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if let Err(error) = self.add_last(element) {
                panic!("{error}");
            }
        }
    }
}

impl<T> IntoIterator for CircularDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T: Hash> Hash for CircularDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularDeque<T> {
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

static_assertions::const_assert!(CircularDeque::<()>::DEFAULT_CAPACITY.is_power_of_two());
static_assertions::const_assert!(CircularDeque::<()>::MINIMUM_CAPACITY.is_power_of_two());
static_assertions::const_assert!(CircularDeque::<()>::MAXIMUM_CAPACITY.is_power_of_two());
static_assertions::assert_impl_all!(CircularDeque<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(CircularDequeCursor<std::rc::Rc<i32>>: Send, Sync);
