//! Last-in-first-out interface.

use super::Collection;
use crate::error::Result;

/// A last-in-first-out stack.
///
/// `Deque::push`/`Deque::pop` pick their ends per container, and on
/// `LinkedList` they pair first-in-first-out. `Stack` always pairs
/// last-in-first-out: the element most recently pushed is the one `peek`
/// sees and `pop` removes.
///
/// # Examples
///
/// ```rust
/// use linea::collection::Stack;
/// use linea::deque::CircularDeque;
/// use linea::list::ArrayList;
///
/// fn reversed<S: Stack<i32>>(stack: &mut S, values: &[i32]) -> Vec<i32> {
///     for value in values {
///         stack.push(*value).unwrap();
///     }
///     let mut popped = Vec::new();
///     while let Ok(value) = stack.pop() {
///         popped.push(value);
///     }
///     popped
/// }
///
/// assert_eq!(reversed(&mut ArrayList::new(), &[1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reversed(&mut CircularDeque::new(), &[1, 2, 3]), vec![3, 2, 1]);
/// ```
pub trait Stack<T>: Collection<T> {
    /// Puts `element` on top.
    ///
    /// # Errors
    ///
    /// Propagates the container's insertion errors.
    fn push(&mut self, element: T) -> Result<()>;

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when empty.
    fn peek(&self) -> Result<&T>;

    /// Removes every element.
    fn clean(&mut self);
}
