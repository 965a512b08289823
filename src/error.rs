use thiserror::Error;

/// The error returned when polling or peeking a [`PriorityQueue`] that holds
/// no elements.
///
/// It carries no state, so callers branch on it by comparison or pattern
/// rather than by inspecting its message.
///
/// ```
/// use prqueue::{EmptyQueueError, PriorityQueue};
///
/// let queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
/// assert_eq!(queue.poll(), Err(EmptyQueueError));
/// assert_eq!(EmptyQueueError.to_string(), "priority queue is empty");
/// ```
///
/// [`PriorityQueue`]: crate::PriorityQueue
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

/// Result type of the fallible [`PriorityQueue`](crate::PriorityQueue)
/// operations.
pub type Result<T, E = EmptyQueueError> = core::result::Result<T, E>;
