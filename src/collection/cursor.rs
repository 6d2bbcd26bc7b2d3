//! The fail-fast iteration protocol.

use crate::error::Result;

/// A detached, fail-fast cursor over a container.
///
/// A cursor is a small value (a position, a "last returned" marker and a
/// consistency witness) that borrows its container only for the duration of
/// each call. This lets `remove` mutate the container through the cursor while
/// still detecting mutations made directly on the container between calls.
///
/// # Protocol
///
/// - [`has_next`](Cursor::has_next) reports whether another element remains.
/// - [`next`](Cursor::next) returns it, or
///   [`NoSuchElement`](crate::error::CollectionError::NoSuchElement) when
///   exhausted.
/// - [`remove`](Cursor::remove) deletes the element returned by the last
///   `next`. It is legal once per `next`; otherwise it fails with
///   [`IllegalState`](crate::error::CollectionError::IllegalState).
///
/// A structural change made on the container outside the cursor invalidates
/// it; the next call reports
/// [`ConcurrentModification`](crate::error::CollectionError::ConcurrentModification).
///
/// # Examples
///
/// ```rust
/// use linea::collection::Cursor;
/// use linea::list::ArrayList;
///
/// let mut list: ArrayList<i32> = (1..=4).collect();
/// let mut cursor = list.cursor();
/// while cursor.has_next(&list) {
///     if *cursor.next(&list).unwrap() % 2 == 0 {
///         cursor.remove(&mut list).unwrap();
///     }
/// }
/// assert_eq!(list.slice(), vec![1, 3]);
/// ```
pub trait Cursor {
    /// The container walked by this cursor.
    type Container: ?Sized;
    /// The element type yielded.
    type Item;

    /// Returns `true` if `next` would yield an element.
    fn has_next(&self, container: &Self::Container) -> bool;

    /// Returns the next element and advances the cursor.
    ///
    /// # Errors
    ///
    /// `NoSuchElement` when exhausted, `ConcurrentModification` when the
    /// container changed behind the cursor's back.
    fn next<'a>(&mut self, container: &'a Self::Container) -> Result<&'a Self::Item>;

    /// Removes the element returned by the last call to `next`.
    ///
    /// # Errors
    ///
    /// `IllegalState` without a preceding `next` (or when called twice),
    /// `ConcurrentModification` when the container changed behind the
    /// cursor's back.
    fn remove(&mut self, container: &mut Self::Container) -> Result<Self::Item>;
}
