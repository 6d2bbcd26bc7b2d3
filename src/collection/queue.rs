//! Queue and double-ended queue interfaces.

use super::Collection;
use crate::error::Result;

/// A head-to-tail queue.
///
/// Each access exists in two forms: a safe form returning `Option`
/// (`poll`, `peek`) and a strict form failing with `NoSuchElement`
/// (`delete`, `element`).
pub trait Queue<T>: Collection<T> {
    /// Adds `element` at the tail.
    ///
    /// # Errors
    ///
    /// Propagates the container's insertion errors.
    fn offer(&mut self, element: T) -> Result<bool>;

    /// Removes and returns the head, or `None` when empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns the head without removing it, or `None` when empty.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the head.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn delete(&mut self) -> Result<T>;

    /// Returns the head without removing it.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn element(&self) -> Result<&T>;
}

/// A queue supporting insertion and removal at both ends.
///
/// # Examples
///
/// ```rust
/// use linea::collection::Deque;
/// use linea::deque::CircularDeque;
/// use linea::list::LinkedList;
///
/// fn rotate<D: Deque<i32>>(deque: &mut D) {
///     let first = deque.remove_first().unwrap();
///     deque.add_last(first).unwrap();
/// }
///
/// let mut linked: LinkedList<i32> = (1..=3).collect();
/// let mut circular: CircularDeque<i32> = (1..=3).collect();
/// rotate(&mut linked);
/// rotate(&mut circular);
/// assert_eq!(linked.slice(), vec![2, 3, 1]);
/// assert_eq!(circular.slice(), vec![2, 3, 1]);
/// ```
pub trait Deque<T>: Queue<T> {
    /// Inserts `element` at the front.
    ///
    /// # Errors
    ///
    /// Propagates the container's insertion errors.
    fn add_first(&mut self, element: T) -> Result<()>;

    /// Inserts `element` at the back.
    ///
    /// # Errors
    ///
    /// Propagates the container's insertion errors.
    fn add_last(&mut self, element: T) -> Result<()>;

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn remove_first(&mut self) -> Result<T>;

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn remove_last(&mut self) -> Result<T>;

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn get_first(&self) -> Result<&T>;

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn get_last(&self) -> Result<&T>;

    /// Removes the first element equal to `element`, walking front to back.
    fn remove_first_occurrence(&mut self, element: &T) -> bool
    where
        T: PartialEq;

    /// Removes the last element equal to `element`, walking back to front.
    fn remove_last_occurrence(&mut self, element: &T) -> bool
    where
        T: PartialEq;

    /// Pushes onto the stack represented by this deque (the front).
    ///
    /// # Errors
    ///
    /// Propagates the container's insertion errors.
    fn push(&mut self, element: T) -> Result<()>;

    /// Pops from the stack represented by this deque.
    ///
    /// Which end is popped is container specific: see the implementor.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn pop(&mut self) -> Result<T>;
}
