//! Shared container vocabulary.
//!
//! This module defines the interfaces every container in the crate speaks:
//!
//! - [`Collection`]: the read-only surface (`size`, `contains`, element
//!   iteration, snapshots) that bulk operations consume
//! - [`Cursor`]: the fail-fast iteration protocol (`has_next`, `next`,
//!   `remove`)
//! - [`List`]: index-addressable sequences
//! - [`Queue`] and [`Deque`]: head/tail access with safe (`Option`) and strict
//!   (`Result`) forms
//! - [`Stack`]: last-in-first-out access
//!
//! # Examples
//!
//! ```rust
//! use linea::collection::Collection;
//! use linea::list::ArrayList;
//!
//! let mut list: ArrayList<i32> = (1..=5).collect();
//! let evens = vec![2, 4];
//!
//! assert!(list.remove_all(&evens));
//! assert_eq!(list.slice(), vec![1, 3, 5]);
//! assert!(Collection::contains(&list, &3));
//! ```

pub(crate) mod base;
mod cursor;
mod list;
mod queue;
mod stack;

pub use base::Collection;
pub use cursor::Cursor;
pub use list::List;
pub use queue::Deque;
pub use queue::Queue;
pub use stack::Stack;
