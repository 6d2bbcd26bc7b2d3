//! Error vocabulary shared by every container.
//!
//! Callers distinguish failures by variant, never by message text:
//!
//! ```rust
//! use linea::error::CollectionError;
//! use linea::list::ArrayList;
//!
//! let list: ArrayList<i32> = ArrayList::new();
//! assert_eq!(
//!     list.get(0),
//!     Err(CollectionError::IndexOutOfBound { index: 0, size: 0 })
//! );
//! ```

/// Result type returned by fallible container operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Failure kinds reported by the containers and their cursors.
///
/// All failures are local and synchronous. Index and state errors are caller
/// bugs and are never recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CollectionError {
    /// A positional argument is outside the legal range for the current size.
    #[error("index out of bound: index {index}, size {size}")]
    IndexOutOfBound {
        /// The offending index.
        index: usize,
        /// The container size at the time of the call.
        size: usize,
    },
    /// No element is available to return.
    #[error("no such element")]
    NoSuchElement,
    /// `remove` was called on a cursor without a preceding `next`.
    #[error("illegal state: remove must follow a call to next")]
    IllegalState,
    /// The reserved "no element" value was inserted into a deque.
    #[error("nil element cannot be stored in a circular deque")]
    NilElement,
    /// A structural change was made behind a live cursor's back.
    #[error("concurrent modification detected")]
    ConcurrentModification,
    /// The backing buffer cannot grow any further.
    #[error("capacity overflow: {requested} slots requested")]
    CapacityOverflow {
        /// The capacity that would have been required.
        requested: usize,
    },
}

impl CollectionError {
    /// Shorthand for building an [`CollectionError::IndexOutOfBound`].
    #[inline]
    pub(crate) const fn index_out_of_bound(index: usize, size: usize) -> Self {
        Self::IndexOutOfBound { index, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CollectionError::index_out_of_bound(3, 2), "index out of bound: index 3, size 2")]
    #[case(CollectionError::NoSuchElement, "no such element")]
    #[case(
        CollectionError::IllegalState,
        "illegal state: remove must follow a call to next"
    )]
    #[case(
        CollectionError::NilElement,
        "nil element cannot be stored in a circular deque"
    )]
    #[case(CollectionError::ConcurrentModification, "concurrent modification detected")]
    #[case(
        CollectionError::CapacityOverflow { requested: 8 },
        "capacity overflow: 8 slots requested"
    )]
    fn test_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_errors_compare_by_variant() {
        assert_eq!(
            CollectionError::index_out_of_bound(1, 0),
            CollectionError::IndexOutOfBound { index: 1, size: 0 }
        );
        assert_ne!(
            CollectionError::NoSuchElement,
            CollectionError::IllegalState
        );
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CollectionError::ConcurrentModification);
    }
}
