//! A thread-safe priority queue that orders its elements by a predicate
//! supplied at construction, rather than by the [`Ord`] trait.
//!
//! [`PriorityQueue`] is a binary heap behind a single reader/writer lock.
//! Inserting ([`add`]) and removing the head ([`poll`]) take the lock
//! exclusively; looking at the head ([`peek`]) and asking for the length
//! share it. Polling or peeking an empty queue yields [`EmptyQueueError`]
//! instead of panicking.
//!
//! ```
//! use prqueue::PriorityQueue;
//!
//! let queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
//! queue.add_all([1, 3, 5, 2, 4]);
//!
//! assert_eq!(queue.peek(), Ok(5));
//! assert_eq!(queue.poll_all(), [5, 4, 3, 2, 1]);
//! ```
//!
//! # Features
//!
//! * `std` (enabled by default): locks with [`parking_lot`].
//! * `spin`: for `no_std` builds (which still need `alloc`), locks with
//!   [`spin`]. Build with `default-features = false, features = ["spin"]`.
//!   One of the two features must be enabled.
//!
//! [`add`]: PriorityQueue::add
//! [`poll`]: PriorityQueue::poll
//! [`peek`]: PriorityQueue::peek
//! [`parking_lot`]: https://docs.rs/parking_lot
//! [`spin`]: https://docs.rs/spin
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

mod error;
mod heap;
pub mod order;
mod queue;
mod sync;

pub use error::{EmptyQueueError, Result};
pub use order::{Less, MaxOrder, MinOrder};
pub use queue::PriorityQueue;
