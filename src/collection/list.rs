//! Index-addressable sequences.

use super::Collection;
use crate::error::Result;

/// An ordered sequence with positional access.
///
/// Positions are zero-based. `get`, `set` and `remove_at` require
/// `index < size`; `add_at` additionally accepts `index == size` (append).
///
/// # Examples
///
/// ```rust
/// use linea::collection::List;
/// use linea::list::{ArrayList, LinkedList};
///
/// fn swap_ends<L: List<i32>>(list: &mut L) {
///     let last = list.size() - 1;
///     let back = *list.get(last).unwrap();
///     let front = list.set(0, back).unwrap();
///     list.set(last, front).unwrap();
/// }
///
/// let mut array: ArrayList<i32> = (1..=3).collect();
/// let mut linked: LinkedList<i32> = (1..=3).collect();
/// swap_ends(&mut array);
/// swap_ends(&mut linked);
/// assert_eq!(array.slice(), vec![3, 2, 1]);
/// assert_eq!(linked.slice(), vec![3, 2, 1]);
/// ```
pub trait List<T>: Collection<T> {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBound` unless `index < size`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBound` unless `index < size`.
    fn set(&mut self, index: usize, element: T) -> Result<T>;

    /// Appends `element`. Always returns `true`.
    fn add(&mut self, element: T) -> bool;

    /// Inserts `element` at `index`, shifting subsequent elements right.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBound` unless `index <= size`.
    fn add_at(&mut self, index: usize, element: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBound` unless `index < size`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Position of the first element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Position of the last element equal to `element`.
    fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Removes every element.
    fn clear(&mut self);
}
