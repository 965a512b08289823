//! The unsynchronised binary heap underneath [`PriorityQueue`].
//!
//! Elements live in a `Vec` in implicit-tree layout: the children of index
//! `i` are at `2 * i + 1` and `2 * i + 2`. No child is ever ordered before
//! its parent, so index 0 always holds the head of the queue.
//!
//! [`PriorityQueue`]: crate::PriorityQueue

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::order::Less;

#[cfg(test)]
mod tests;

pub(crate) struct Heap<T, L> {
    data: Vec<T>,
    less: L,
}

impl<T: Clone, L: Clone> Clone for Heap<T, L> {
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), less: self.less.clone() }
    }
}

impl<T, L> Heap<T, L> {
    pub(crate) fn new(less: L) -> Self {
        Heap { data: Vec::new(), less }
    }

    pub(crate) fn with_capacity(less: L, capacity: usize) -> Self {
        Heap { data: Vec::with_capacity(capacity), less }
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, L: Less<T>> Heap<T, L> {
    /// Takes ownership of `data` and reorders it into a heap in *O*(*n*).
    pub(crate) fn from_vec(less: L, data: Vec<T>) -> Self {
        let mut heap = Heap { data, less };
        heap.rebuild();
        heap
    }

    pub(crate) fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the head of the heap.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let item = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        item
    }

    /// Empties the heap, returning its elements in extraction order.
    pub(crate) fn pop_all(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    #[inline]
    fn less_at(&self, i: usize, j: usize) -> bool {
        self.less.less(&self.data[i], &self.data[j])
    }

    /// Moves the element at `pos` towards the root while it is ordered
    /// before its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less_at(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` towards the leaves while one of its
    /// children is ordered before it.
    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        loop {
            let mut child = 2 * pos + 1;
            if child >= end {
                break;
            }
            // pick the child that leaves first
            if child + 1 < end && self.less_at(child + 1, child) {
                child += 1;
            }
            if !self.less_at(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    fn rebuild(&mut self) {
        let mut n = self.data.len() / 2;
        while n > 0 {
            n -= 1;
            self.sift_down(n);
        }
    }
}

impl<T, L: Less<T>> Extend<T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        iter.for_each(move |elem| self.push(elem));
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Width, fill and alignment apply to the whole `[a b c]` listing, not to
/// each element.
impl<T: fmt::Display, L> fmt::Display for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut listing = String::from("[");
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                listing.push(' ');
            }
            write!(listing, "{item}")?;
        }
        listing.push(']');
        f.pad(&listing)
    }
}
