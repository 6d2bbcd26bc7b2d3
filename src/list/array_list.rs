//! Growable contiguous-array list.
//!
//! This module provides [`ArrayList`], an index-addressable sequence backed
//! by one resizable buffer, and [`ArrayListCursor`], its fail-fast cursor.
//!
//! # Overview
//!
//! - O(1) `get`, `set`, `size`
//! - O(1) amortized `add` (append)
//! - O(n) `add_at`, `remove_at`, `remove` (subsequent elements shift)
//! - O(n × m) `remove_all` / `retain_all` against a collection of size m
//!
//! # Examples
//!
//! ```rust
//! use linea::list::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add("a");
//! list.add("c");
//! list.add_at(1, "b").unwrap();
//!
//! assert_eq!(list.slice(), vec!["a", "b", "c"]);
//! assert_eq!(list.set(0, "z"), Ok("a"));
//! assert_eq!(list.remove_at(2), Ok("c"));
//! assert_eq!(list.index_of(&"b"), Some(1));
//! ```
//!
//! # Growth
//!
//! When an insertion needs more room than the buffer has, the buffer grows to
//! the larger of the required size and one and a half times the current
//! capacity (never less than [`ArrayList::DEFAULT_CAPACITY`]). The buffer is
//! never shrunk implicitly; see [`ArrayList::trim_to_size`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;

use crate::collection::base::{elements_equal, same_container};
use crate::collection::{Collection, Cursor, List, Stack};
use crate::error::{CollectionError, Result};

/// A growable list backed by a contiguous buffer.
///
/// Elements `[0, size)` are valid and in insertion order. The capacity may
/// exceed the size but never precedes it.
///
/// # Time Complexity
///
/// | Operation    | Complexity     |
/// |--------------|----------------|
/// | `get`/`set`  | O(1)           |
/// | `add`        | O(1) amortized |
/// | `add_at`     | O(n)           |
/// | `remove_at`  | O(n)           |
/// | `index_of`   | O(n)           |
///
/// # Examples
///
/// ```rust
/// use linea::list::ArrayList;
///
/// let list: ArrayList<i32> = (1..=3).collect();
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get(1), Ok(&2));
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    elements: Vec<T>,
    /// Bumped on every structural change; cursors compare against it.
    modification_count: usize,
}

impl<T> ArrayList<T> {
    /// Capacity reserved by the first growth of an empty list.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty list without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            modification_count: 0,
        }
    }

    /// Creates an empty list able to hold `capacity` elements without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let list: ArrayList<i32> = ArrayList::with_capacity(32);
    /// assert!(list.capacity() >= 32);
    /// assert_eq!(list.size(), 0);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            modification_count: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the buffer can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::error::CollectionError;
    /// use linea::list::ArrayList;
    ///
    /// let list: ArrayList<i32> = (10..13).collect();
    /// assert_eq!(list.get(2), Ok(&12));
    /// assert_eq!(
    ///     list.get(3),
    ///     Err(CollectionError::IndexOutOfBound { index: 3, size: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_element_index(index)?;
        Ok(&self.elements[index])
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        self.check_element_index(index)?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    /// Appends `element` to the end of the list. Always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.grow_for(1);
        self.elements.push(element);
        self.record_modification();
        true
    }

    /// Inserts `element` at `index`, shifting the element currently there
    /// (if any) and every subsequent element one position to the right.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index <= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let mut list: ArrayList<i32> = vec![1, 3].into_iter().collect();
    /// list.add_at(1, 2).unwrap();
    /// list.add_at(3, 4).unwrap();
    /// assert_eq!(list.slice(), vec![1, 2, 3, 4]);
    /// ```
    pub fn add_at(&mut self, index: usize, element: T) -> Result<()> {
        self.check_position_index(index)?;
        self.grow_for(1);
        self.elements.insert(index, element);
        self.record_modification();
        Ok(())
    }

    /// Removes the element at `index`, shifting subsequent elements left,
    /// and returns it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `index < size`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_element_index(index)?;
        let element = self.elements.remove(index);
        self.record_modification();
        Ok(element)
    }

    /// Removes every element. The capacity is retained.
    pub fn clear(&mut self) {
        if !self.elements.is_empty() {
            self.elements.clear();
            self.record_modification();
        }
    }

    /// Grows the buffer, if needed, so it can hold at least `minimum_capacity`
    /// elements.
    pub fn ensure_capacity(&mut self, minimum_capacity: usize) {
        if minimum_capacity > self.elements.len() {
            self.grow_for(minimum_capacity - self.elements.len());
        }
    }

    /// Shrinks the buffer to the current size.
    pub fn trim_to_size(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Returns an iterator over references to the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a fail-fast cursor positioned before the first element.
    ///
    /// See [`Cursor`] for the protocol.
    #[must_use]
    pub const fn cursor(&self) -> ArrayListCursor<T> {
        ArrayListCursor {
            cursor: 0,
            last_returned: None,
            expected_modifications: self.modification_count,
            element: PhantomData,
        }
    }

    fn check_element_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(CollectionError::index_out_of_bound(
                index,
                self.elements.len(),
            ))
        }
    }

    fn check_position_index(&self, index: usize) -> Result<()> {
        if index <= self.elements.len() {
            Ok(())
        } else {
            Err(CollectionError::index_out_of_bound(
                index,
                self.elements.len(),
            ))
        }
    }

    /// Makes room for `additional` more elements using the list's own growth
    /// policy rather than `Vec`'s.
    fn grow_for(&mut self, additional: usize) {
        let required = self.elements.len().saturating_add(additional);
        let capacity = self.elements.capacity();
        if required <= capacity {
            return;
        }
        let grown = capacity.saturating_add(capacity >> 1);
        let new_capacity = required.max(grown).max(Self::DEFAULT_CAPACITY);
        self.elements
            .reserve_exact(new_capacity - self.elements.len());
        tracing::trace!(
            old_capacity = capacity,
            new_capacity = self.elements.capacity(),
            "array list buffer grown"
        );
    }

    #[inline]
    const fn record_modification(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Removes the first element equal to `element`, if present.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => {
                self.elements.remove(index);
                self.record_modification();
                true
            }
            None => false,
        }
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    /// Returns the position of the last element equal to `element`.
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|candidate| candidate == element)
    }

    /// Returns `true` if some element equals `element`.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
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
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let mut list: ArrayList<i32> = (1..=6).collect();
    /// assert!(list.remove_all(&vec![2, 4, 6]));
    /// assert_eq!(list.slice(), vec![1, 3, 5]);
    /// assert!(!list.remove_all(&vec![7]));
    /// ```
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, false)
    }

    /// Keeps only the elements that are also present in `other`.
    ///
    /// Returns `true` if the list was modified.
    pub fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        self.batch_remove(other, true)
    }

    /// Compacts kept elements toward index 0 in one left-to-right pass. An
    /// element is kept iff its membership in `other` equals `retain`.
    fn batch_remove<C>(&mut self, other: &C, retain: bool) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let original_size = self.elements.len();
        self.elements
            .retain(|element| other.contains(element) == retain);
        let modified = self.elements.len() != original_size;
        if modified {
            self.record_modification();
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
        self.size() == other.size() && elements_equal(self.iter(), other.elements())
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a list holding a copy of `collection`'s elements in its
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let list = ArrayList::from_collection(&vec![1, 2, 3]);
    /// assert_eq!(list.slice(), vec![1, 2, 3]);
    /// ```
    pub fn from_collection<C>(collection: &C) -> Self
    where
        C: Collection<T> + ?Sized,
    {
        let mut list = Self::with_capacity(collection.size());
        list.elements.extend(collection.elements().cloned());
        list
    }

    /// Appends a copy of every element of `other`, in its iteration order.
    ///
    /// Returns `true` if the list was modified.
    pub fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let incoming = other.slice();
        if incoming.is_empty() {
            return false;
        }
        self.grow_for(incoming.len());
        self.elements.extend(incoming);
        self.record_modification();
        true
    }

    /// Inserts a copy of every element of `other` at `index`, preserving its
    /// iteration order and shifting subsequent elements right.
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
    /// use linea::list::ArrayList;
    ///
    /// let mut list: ArrayList<i32> = vec![1, 4].into_iter().collect();
    /// assert_eq!(list.add_all_at(1, &vec![2, 3]), Ok(true));
    /// assert_eq!(list.slice(), vec![1, 2, 3, 4]);
    /// ```
    pub fn add_all_at<C>(&mut self, index: usize, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
    {
        self.check_position_index(index)?;
        let incoming = other.slice();
        if incoming.is_empty() {
            return Ok(false);
        }
        self.grow_for(incoming.len());
        self.elements.splice(index..index, incoming);
        self.record_modification();
        Ok(true)
    }

    /// Returns a copy of the elements in `[from, to)`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBound`] unless `from <= to <= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linea::list::ArrayList;
    ///
    /// let list: ArrayList<i32> = (0..5).collect();
    /// assert_eq!(list.sub_list(1, 4).unwrap().slice(), vec![1, 2, 3]);
    /// assert!(list.sub_list(2, 2).unwrap().is_empty());
    /// assert!(list.sub_list(3, 2).is_err());
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self> {
        let size = self.elements.len();
        if to > size {
            return Err(CollectionError::index_out_of_bound(to, size));
        }
        if from > to {
            return Err(CollectionError::index_out_of_bound(from, size));
        }
        Ok(self.elements[from..to].iter().cloned().collect())
    }

    /// Returns a defensive copy of all elements in order.
    pub fn slice(&self) -> Vec<T> {
        self.elements.clone()
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A fail-fast cursor over an [`ArrayList`].
///
/// Created by [`ArrayList::cursor`].
pub struct ArrayListCursor<T> {
    /// Index of the next element to return.
    cursor: usize,
    /// Index of the element returned by the last `next`, if `remove` is legal.
    last_returned: Option<usize>,
    expected_modifications: usize,
    element: PhantomData<fn() -> T>,
}

impl<T> ArrayListCursor<T> {
    fn check_for_modification(&self, list: &ArrayList<T>) -> Result<()> {
        if self.expected_modifications == list.modification_count {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.expected_modifications,
                actual = list.modification_count,
                "array list modified behind a live cursor"
            );
            Err(CollectionError::ConcurrentModification)
        }
    }
}

impl<T> Cursor for ArrayListCursor<T> {
    type Container = ArrayList<T>;
    type Item = T;

    #[inline]
    fn has_next(&self, list: &ArrayList<T>) -> bool {
        self.cursor < list.size()
    }

    fn next<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T> {
        self.check_for_modification(list)?;
        let index = self.cursor;
        let element = list
            .elements
            .get(index)
            .ok_or(CollectionError::NoSuchElement)?;
        self.last_returned = Some(index);
        self.cursor = index + 1;
        Ok(element)
    }

    fn remove(&mut self, list: &mut ArrayList<T>) -> Result<T> {
        let index = self.last_returned.ok_or(CollectionError::IllegalState)?;
        self.check_for_modification(list)?;
        let element = list.remove_at(index)?;
        self.cursor = index;
        self.last_returned = None;
        self.expected_modifications = list.modification_count;
        Ok(element)
    }
}

impl<T> fmt::Debug for ArrayListCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ArrayListCursor")
            .field("cursor", &self.cursor)
            .field("last_returned", &self.last_returned)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Collection Trait Implementations
// =============================================================================

impl<T> Collection<T> for ArrayList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.elements.iter())
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Self::contains(self, element)
    }

    fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> List<T> for ArrayList<T> {
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

/// The top of the stack is the back of the list.
impl<T> Stack<T> for ArrayList<T> {
    fn push(&mut self, element: T) -> Result<()> {
        Self::add(self, element);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        match self.elements.len().checked_sub(1) {
            Some(last) => Self::remove_at(self, last),
            None => Err(CollectionError::NoSuchElement),
        }
    }

    fn peek(&self) -> Result<&T> {
        self.elements.last().ok_or(CollectionError::NoSuchElement)
    }

    fn clean(&mut self) {
        Self::clear(self);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            modification_count: 0,
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(ArrayList<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(ArrayListCursor<std::rc::Rc<i32>>: Send, Sync);
