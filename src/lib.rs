//! # linea
//!
//! Mutable list, queue and deque containers sharing one collection vocabulary
//! and one fail-fast cursor protocol.
//!
//! ## Overview
//!
//! - **Collection vocabulary**: [`Collection`](collection::Collection),
//!   [`List`](collection::List), [`Queue`](collection::Queue),
//!   [`Deque`](collection::Deque) and [`Stack`](collection::Stack) traits
//! - **Cursors**: detached, fail-fast iteration with removal through the
//!   cursor
//! - **`ArrayList`**: growable contiguous buffer
//! - **`LinkedList`**: doubly-linked node chain usable as list, queue and
//!   deque
//! - **`CircularDeque`**: power-of-two ring buffer
//!
//! Containers are single-threaded values. Share one across threads by wrapping
//! it in a lock.
//!
//! ## Feature Flags
//!
//! - `array-list`: [`ArrayList`](list::ArrayList)
//! - `linked-list`: [`LinkedList`](list::LinkedList)
//! - `circular-deque`: [`CircularDeque`](deque::CircularDeque)
//! - `full`: Enable all containers (the default)
//!
//! ## Example
//!
//! ```rust
//! use linea::prelude::*;
//!
//! let mut list: ArrayList<i32> = (1..=3).collect();
//! let mut deque: CircularDeque<i32> = CircularDeque::new();
//!
//! let mut cursor = list.cursor();
//! while let Ok(&value) = cursor.next(&list) {
//!     deque.push(value).unwrap();
//! }
//! list.clear();
//!
//! assert!(list.is_empty());
//! assert_eq!(deque.slice(), vec![3, 2, 1]);
//! assert_eq!(list.get(0), Err(CollectionError::IndexOutOfBound { index: 0, size: 0 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the collection traits and the error type.
///
/// # Usage
///
/// ```rust
/// use linea::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::error::{CollectionError, Result};

    #[cfg(any(feature = "array-list", feature = "linked-list"))]
    pub use crate::list::*;

    #[cfg(feature = "circular-deque")]
    pub use crate::deque::*;
}

pub mod collection;
pub mod error;

#[cfg(any(feature = "array-list", feature = "linked-list"))]
pub mod list;

#[cfg(feature = "circular-deque")]
pub mod deque;
