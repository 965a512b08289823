//! A thread-safe priority queue ordered by a caller-supplied predicate.

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::error::{EmptyQueueError, Result};
use crate::heap::Heap;
use crate::order::{Less, MinOrder};
use crate::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};


/// A priority queue implemented with a binary heap behind a reader/writer
/// lock.
///
/// The head of the queue is the element for which no other element is
/// [`less`](Less::less) under the predicate `L`. Pass `|a, b| a < b` for a
/// min-queue and `|a, b| a > b` for a max-queue. Elements the predicate
/// considers equivalent leave in an unspecified order; if first-in first-out
/// among equals matters, fold an insertion counter into the elements and
/// into the predicate.
///
/// Every method takes `&self`. [`add`] and [`poll`] hold the lock
/// exclusively for the duration of one sift (*O*(log(*n*))), while [`peek`],
/// [`len`] and [`is_empty`] share it with each other. The queue is `Sync`
/// whenever `T` and `L` are `Send + Sync`, so it can be shared between
/// threads through an [`Arc`] or a scoped borrow.
///
/// The predicate is called while the lock is held. It must not call back
/// into the same queue, and it should describe a strict weak ordering; a
/// predicate that does not is not detected, and leaves the polling order
/// unspecified.
///
/// # Examples
///
/// ```
/// use prqueue::{EmptyQueueError, PriorityQueue};
///
/// #[derive(Clone, Debug)]
/// struct Employee {
///     salary: u32,
///     name: &'static str,
/// }
///
/// let queue = PriorityQueue::new(|a: &Employee, b: &Employee| a.salary < b.salary);
///
/// queue.add(Employee { salary: 100, name: "Mike" });
/// queue.add(Employee { salary: 200, name: "Raph" });
/// queue.add(Employee { salary: 250, name: "Donni" });
/// queue.add(Employee { salary: 150, name: "Leo" });
///
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.peek().map(|e| e.name), Ok("Mike"));
///
/// let mut names = Vec::new();
/// while let Ok(employee) = queue.poll() {
///     names.push(employee.name);
/// }
/// assert_eq!(names, ["Mike", "Leo", "Raph", "Donni"]);
///
/// assert!(queue.is_empty());
/// assert_eq!(queue.peek().map(|e| e.name), Err(EmptyQueueError));
/// ```
///
/// Sharing one queue between threads:
///
/// ```
/// use prqueue::PriorityQueue;
/// use std::thread;
///
/// let queue = PriorityQueue::new(|a: &u64, b: &u64| a > b);
///
/// thread::scope(|s| {
///     for t in 0..4 {
///         let queue = &queue;
///         s.spawn(move || (0..100).for_each(|i| queue.add(t * 100 + i)));
///     }
/// });
///
/// assert_eq!(queue.len(), 400);
/// assert_eq!(queue.poll(), Ok(399));
/// ```
///
/// # Time complexity
///
/// | [add]         | [poll]        | [peek]  |
/// |---------------|---------------|---------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)  |
///
/// [`add`]: PriorityQueue::add
/// [`poll`]: PriorityQueue::poll
/// [`peek`]: PriorityQueue::peek
/// [`len`]: PriorityQueue::len
/// [`is_empty`]: PriorityQueue::is_empty
/// [`Arc`]: alloc::sync::Arc
/// [add]: PriorityQueue::add
/// [poll]: PriorityQueue::poll
/// [peek]: PriorityQueue::peek
pub struct PriorityQueue<T, L = MinOrder<T>> {
    heap: RwLock<Heap<T, L>>,
}

impl<T, L: Less<T>> PriorityQueue<T, L> {
    /// Creates an empty queue ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let min_queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
    /// let max_queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    ///
    /// for x in [1, 3, 5, 2, 4] {
    ///     min_queue.add(x);
    ///     max_queue.add(x);
    /// }
    /// assert_eq!(min_queue.poll(), Ok(1));
    /// assert_eq!(max_queue.poll(), Ok(5));
    /// ```
    #[must_use]
    pub fn new(less: L) -> Self {
        PriorityQueue { heap: RwLock::new(Heap::new(less)) }
    }

    /// Creates an empty queue ordered by `less`, able to hold at least
    /// `capacity` elements before reallocating.
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::with_capacity(|a: &u8, b: &u8| a < b, 1000);
    /// assert!(queue.capacity() >= 1000);
    /// assert!(queue.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(less: L, capacity: usize) -> Self {
        PriorityQueue { heap: RwLock::new(Heap::with_capacity(less, capacity)) }
    }

    /// Builds a queue ordered by `less` out of the elements of `data`,
    /// reusing its allocation.
    ///
    /// This is *O*(*n*), cheaper than adding the elements one at a time.
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::from_vec(|a: &i32, b: &i32| a > b, vec![4, 9, 1, 7]);
    /// assert_eq!(queue.poll_all(), [9, 7, 4, 1]);
    /// ```
    #[must_use]
    pub fn from_vec(less: L, data: Vec<T>) -> Self {
        let len = data.len();
        let heap = Heap::from_vec(less, data);
        debug!(len, "built priority queue from vector");
        PriorityQueue { heap: RwLock::new(heap) }
    }

    /// Inserts `element` into the queue.
    ///
    /// The element is appended after the last one and moved towards the
    /// head while it is ordered before its parent.
    pub fn add(&self, element: T) {
        let mut heap = self.write();
        heap.push(element);
        trace!(len = heap.len(), "added element to priority queue");
    }

    /// Inserts every element of `iter`, holding the lock once for the whole
    /// batch.
    ///
    /// The iterator is drained before the lock is taken, so it may itself
    /// read from this queue.
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::new(|a: &char, b: &char| a < b);
    /// queue.add_all("queue".chars());
    /// assert_eq!(queue.len(), 5);
    /// assert_eq!(queue.poll(), Ok('e'));
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&self, iter: I) {
        let batch: Vec<T> = iter.into_iter().collect();
        let added = batch.len();
        let mut heap = self.write();
        heap.extend(batch);
        debug!(added, len = heap.len(), "added batch to priority queue");
    }

    /// Removes the head of the queue and hands it to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue holds no elements; the queue
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use prqueue::{EmptyQueueError, PriorityQueue};
    ///
    /// let queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
    /// assert_eq!(queue.poll(), Err(EmptyQueueError));
    ///
    /// queue.add(100500);
    /// assert_eq!(queue.poll(), Ok(100500));
    /// assert_eq!(queue.poll(), Err(EmptyQueueError));
    /// ```
    pub fn poll(&self) -> Result<T> {
        let mut heap = self.write();
        match heap.pop() {
            Some(element) => {
                trace!(len = heap.len(), "polled head of priority queue");
                Ok(element)
            }
            None => {
                trace!("poll on empty priority queue");
                Err(EmptyQueueError)
            }
        }
    }

    /// Removes every element, returning them in the order [`poll`] would
    /// have, under a single lock acquisition.
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::new(|a: &&str, b: &&str| a.len() < b.len());
    /// queue.add_all(["ccc", "a", "bb"]);
    /// assert_eq!(queue.poll_all(), ["a", "bb", "ccc"]);
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// [`poll`]: PriorityQueue::poll
    pub fn poll_all(&self) -> Vec<T> {
        let mut heap = self.write();
        let polled = heap.pop_all();
        debug!(polled = polled.len(), "drained priority queue");
        polled
    }

    /// Consumes the queue, returning its elements in polling order.
    ///
    /// ```
    /// use prqueue::{MaxOrder, PriorityQueue};
    ///
    /// let queue: PriorityQueue<i32, MaxOrder<i32>> = [1, 5, 2].into_iter().collect();
    /// assert_eq!(queue.into_sorted_vec(), [5, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_inner().pop_all()
    }
}

impl<T, L> PriorityQueue<T, L> {
    fn read(&self) -> RwLockReadGuard<'_, Heap<T, L>> {
        self.heap.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Heap<T, L>> {
        self.heap.write()
    }

    /// Returns a copy of the head of the queue without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use prqueue::{EmptyQueueError, PriorityQueue};
    ///
    /// let queue = PriorityQueue::new(|a: &String, b: &String| a < b);
    /// assert_eq!(queue.peek(), Err(EmptyQueueError));
    ///
    /// queue.add("pear".to_owned());
    /// queue.add("apple".to_owned());
    /// assert_eq!(queue.peek().as_deref(), Ok("apple"));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek_with(T::clone)
    }

    /// Lends the head of the queue to `f` and returns what it computes.
    ///
    /// The shared lock is held while `f` runs, so `f` must not add to or
    /// poll from this queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue holds no elements; `f` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::new(|a: &Vec<u8>, b: &Vec<u8>| a.len() > b.len());
    /// queue.add(vec![0; 16]);
    /// queue.add(vec![0; 1024]);
    ///
    /// assert_eq!(queue.peek_with(Vec::len), Ok(1024));
    /// ```
    pub fn peek_with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let heap = self.read();
        match heap.peek() {
            Some(head) => Ok(f(head)),
            None => {
                trace!("peek on empty priority queue");
                Err(EmptyQueueError)
            }
        }
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the number of elements the queue can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    /// Drops every element in the queue.
    ///
    /// ```
    /// use prqueue::PriorityQueue;
    ///
    /// let queue = PriorityQueue::from_vec(|a: &i32, b: &i32| a < b, vec![1, 3]);
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    pub fn clear(&self) {
        let mut heap = self.write();
        let cleared = heap.len();
        heap.clear();
        debug!(cleared, "cleared priority queue");
    }
}

impl<T: Clone, L: Clone> Clone for PriorityQueue<T, L> {
    fn clone(&self) -> Self {
        PriorityQueue { heap: RwLock::new(self.read().clone()) }
    }
}

impl<T, L: Less<T> + Default> Default for PriorityQueue<T, L> {
    /// Creates an empty queue under the default order, which is ascending
    /// unless `L` says otherwise.
    #[inline]
    fn default() -> Self {
        PriorityQueue::new(L::default())
    }
}

/// Lists the elements in their internal heap layout, which is not sorted.
/// Meant for diagnostics only.
impl<T: fmt::Debug, L> fmt::Debug for PriorityQueue<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

/// Renders the elements in their internal heap layout as `[a b c]`.
///
/// ```
/// use prqueue::PriorityQueue;
///
/// let queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
/// queue.add_all([1, 3, 5, 2, 4]);
/// assert_eq!(queue.to_string(), "[1 2 5 3 4]");
/// ```
impl<T: fmt::Display, L> fmt::Display for PriorityQueue<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.read(), f)
    }
}

impl<T, L: Less<T> + Default> FromIterator<T> for PriorityQueue<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vec(L::default(), iter.into_iter().collect())
    }
}

impl<T, L: Less<T>> Extend<T> for PriorityQueue<T, L> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
