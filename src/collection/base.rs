//! The read-only surface shared by every container.

use std::collections::VecDeque;

/// A group of elements that can be sized, searched and walked in order.
///
/// Bulk operations (`add_all`, `remove_all`, `retain_all`, `contains_all`,
/// `equals`) accept any `Collection`, including plain `Vec`s, slices and
/// `VecDeque`s. Elements are always copied into the destination's own
/// storage; no storage is shared between two containers.
///
/// # Examples
///
/// ```rust
/// use linea::collection::Collection;
///
/// let elements = vec![1, 2, 3];
/// assert_eq!(Collection::size(&elements), 3);
/// assert!(Collection::contains(&elements, &2));
/// assert_eq!(Collection::slice(&elements), vec![1, 2, 3]);
/// ```
pub trait Collection<T> {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the elements in iteration order.
    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements().any(|candidate| candidate == element)
    }

    /// Returns a defensive copy of all elements in iteration order.
    ///
    /// The returned `Vec` may be modified freely without affecting the
    /// collection.
    fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements().cloned().collect()
    }
}

impl<T> Collection<T> for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Collection<T> for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Collection<T> for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

/// Returns `true` if both references point at the same container.
///
/// Used by `equals` to short-circuit comparisons of a container with itself.
#[inline]
pub(crate) fn same_container<A: ?Sized, B: ?Sized>(left: &A, right: &B) -> bool {
    std::ptr::addr_eq(left as *const A, right as *const B)
}

/// Pairwise comparison of two element sequences of equal advertised size.
pub(crate) fn elements_equal<'a, T: PartialEq + 'a>(
    mut left: impl Iterator<Item = &'a T>,
    mut right: impl Iterator<Item = &'a T>,
) -> bool {
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a == b => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}
