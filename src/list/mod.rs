//! Mutable index-addressable lists.
//!
//! This module provides two implementations of [`List`](crate::collection::List):
//!
//! - [`ArrayList`]: a growable contiguous buffer with amortized O(1) append,
//!   also usable as a [`Stack`](crate::collection::Stack) topped at the back
//! - [`LinkedList`]: a doubly-linked list that doubles as a queue and deque
//!
//! Both permit every element value, including `Option::None`, and both hand
//! out fail-fast cursors that report
//! [`ConcurrentModification`](crate::error::CollectionError::ConcurrentModification)
//! once the list is changed behind their back.
//!
//! # Examples
//!
//! ## `ArrayList`
//!
//! ```rust
//! use linea::list::ArrayList;
//!
//! let mut list = ArrayList::with_capacity(4);
//! list.add("a");
//! list.add("c");
//! list.add_at(1, "b").unwrap();
//! assert_eq!(list.slice(), vec!["a", "b", "c"]);
//! ```
//!
//! ## `LinkedList`
//!
//! ```rust
//! use linea::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.offer(1);
//! list.offer(2);
//! assert_eq!(list.poll(), Some(1));
//! assert_eq!(list.peek(), Some(&2));
//! ```

#[cfg(feature = "array-list")]
mod array_list;
#[cfg(feature = "linked-list")]
mod linked_list;

#[cfg(feature = "array-list")]
pub use array_list::ArrayList;
#[cfg(feature = "array-list")]
pub use array_list::ArrayListCursor;

#[cfg(feature = "linked-list")]
pub use linked_list::IntoIter as LinkedListIntoIter;
#[cfg(feature = "linked-list")]
pub use linked_list::Iter as LinkedListIter;
#[cfg(feature = "linked-list")]
pub use linked_list::LinkedList;
#[cfg(feature = "linked-list")]
pub use linked_list::LinkedListCursor;
