//! A priority queue implemented with a binary heap.

use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::slice;

use tracing::trace;

use crate::error::{Error, Result};
use crate::key::{self, Identity, KeyFn};

/// Which end of the key order a [`Heap`] hands out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Smallest key first (a min-heap).
    #[default]
    Ascending,
    /// Largest key first (a max-heap).
    Descending,
}

/// A priority queue implemented with a binary heap over a `Vec`.
///
/// Items are ordered by a key derived from each item, smallest first unless
/// the heap is built with [`Order::Descending`]. Items with equal keys come out
/// in unspecified order.
///
/// ```
/// use avl_collections::{Heap, Order};
/// let mut heap = Heap::with_order(Order::Descending);
/// heap.update([5, 4, 7, 8, 4, 6, 2, 7, 1]);
/// assert_eq!(heap.peek(), Ok(&8));
/// assert_eq!(heap.into_sorted_vec(), [8, 7, 7, 6, 5, 4, 4, 2, 1]);
/// ```
///
/// # Time complexity
///
/// | [add]         | [pop]         | [peek] | [update]        |
/// |---------------|---------------|--------|-----------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) | *O*(*n* + *k*)~ |
///
/// [add]: Heap::add
/// [pop]: Heap::pop
/// [peek]: Heap::peek
/// [update]: Heap::update
#[derive(Clone)]
pub struct Heap<T, F = Identity> {
    data: Vec<T>,
    key_fn: F,
    order: Order,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_key_fn(Identity, Order::Ascending)
    }

    /// Creates an empty heap handing out items in the given order.
    pub fn with_order(order: Order) -> Self {
        Self::with_key_fn(Identity, order)
    }
}

impl<T, F: KeyFn<T>> Heap<T, F> {
    /// Creates an empty heap ordering items by `key_fn`.
    pub fn with_key_fn(key_fn: F, order: Order) -> Self {
        Self {
            data: Vec::new(),
            key_fn,
            order,
        }
    }

    /// Turns a vector into a heap in *O*(*n*).
    pub fn from_vec(data: Vec<T>, key_fn: F, order: Order) -> Self {
        let mut heap = Self { data, key_fn, order };
        heap.rebuild();
        heap
    }

    /// Returns the item that [`pop`](Heap::pop) would remove.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::Empty)
    }

    /// Removes the first item and returns it.
    pub fn pop(&mut self) -> Result<T> {
        let mut item = self.data.pop().ok_or(Error::Empty)?;
        if !self.data.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Pushes an item onto the heap.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Pushes an item and then pops the first item, which may be `item` itself.
    ///
    /// Faster than [`add`](Heap::add) followed by [`pop`](Heap::pop), and never
    /// fails since the heap is non-empty once `item` is in.
    pub fn add_pop(&mut self, item: T) -> T {
        match self.data.first() {
            Some(top) if self.precedes(top, &item) => {
                let top = mem::replace(&mut self.data[0], item);
                self.sift_down(0);
                top
            }
            _ => item,
        }
    }

    /// Pops the first item and then pushes `item`.
    ///
    /// The returned item may sort after `item`. Fails with [`Error::Empty`] on an
    /// empty heap, leaving the heap unchanged and dropping `item`.
    pub fn pop_add(&mut self, item: T) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }
        let top = mem::replace(&mut self.data[0], item);
        self.sift_down(0);
        Ok(top)
    }

    /// Pushes all items of `items`.
    pub fn update<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let start = self.data.len();
        self.data.extend(items);
        self.rebuild_tail(start);
    }

    /// Consumes the heap and returns its items in the order `pop` would.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns true if `lhs` has to leave the heap before `rhs`.
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        let ordering = key::compare(&self.key_fn, lhs, rhs);
        match self.order {
            Order::Ascending => ordering.is_lt(),
            Order::Descending => ordering.is_gt(),
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        loop {
            let mut child = 2 * pos + 1;
            if child >= end {
                break;
            }
            // Pick the child that leaves first
            if child + 1 < end && self.precedes(&self.data[child + 1], &self.data[child]) {
                child += 1;
            }
            if !self.precedes(&self.data[child], &self.data[pos]) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    fn rebuild(&mut self) {
        trace!(len = self.data.len(), "heapify");
        for pos in (0..self.data.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    // Restores the heap after items were appended from `start` on.
    fn rebuild_tail(&mut self, start: usize) {
        if start == self.data.len() {
            return;
        }

        let tail_len = self.data.len() - start;

        #[inline(always)]
        fn log2_fast(x: usize) -> usize {
            (usize::BITS - x.leading_zeros() - 1) as usize
        }

        // A full rebuild costs about 2 * len comparisons, sifting each new
        // item up about tail_len * log2(start).
        let better_to_rebuild = if start < tail_len {
            true
        } else {
            2 * self.data.len() < tail_len * log2_fast(start)
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for pos in start..self.data.len() {
                self.sift_up(pos);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn check_integrity(&self) {
        for pos in 1..self.data.len() {
            let parent = (pos - 1) / 2;
            assert!(!self.precedes(&self.data[pos], &self.data[parent]));
        }
    }
}

impl<T, F> Heap<T, F> {
    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops all items.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the order this heap hands out items in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Gets an iterator visiting all items in arbitrary order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns its items in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, F: Default> Default for Heap<T, F> {
    /// Creates an empty min-heap.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            key_fn: F::default(),
            order: Order::default(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, F: KeyFn<T> + Default> FromIterator<T> for Heap<T, F> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), F::default(), Order::default())
    }
}

impl<T, F: KeyFn<T>> Extend<T> for Heap<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<'a, T, F> IntoIterator for &'a Heap<T, F> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
