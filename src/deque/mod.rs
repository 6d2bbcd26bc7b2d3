//! Double-ended queues.
//!
//! - [`CircularDeque`]: a ring buffer with power-of-two capacity and
//!   amortized O(1) insertion at both ends
//!
//! # Examples
//!
//! ```rust
//! use linea::deque::CircularDeque;
//!
//! let mut deque = CircularDeque::<i32>::with_capacity(4);
//! deque.offer(1).unwrap();
//! deque.offer(2).unwrap();
//! deque.push(0).unwrap();
//!
//! let drained: Vec<i32> = deque.into_iter().collect();
//! assert_eq!(drained, vec![0, 1, 2]);
//! ```

mod circular_deque;

pub use circular_deque::CircularDeque;
pub use circular_deque::CircularDequeCursor;
pub use circular_deque::IntoIter as CircularDequeIntoIter;
pub use circular_deque::Iter as CircularDequeIter;
