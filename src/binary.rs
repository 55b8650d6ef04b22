//! Array-backed binary min-heap
//!
//! A binary min-heap stored as an implicit complete binary tree in a single
//! contiguous `Vec`. The element at index `i` has its children at `2i + 1`
//! and `2i + 2`, and its parent at `(i - 1) / 2`.
//!
//! The ordering is pluggable through [`compare::Compare`]: by default the
//! natural [`Ord`] order of the elements is used, but any comparator (including
//! a plain `Fn(&T, &T) -> Ordering` closure) can be injected. Reversing the
//! comparator with [`Compare::rev`] yields a max-heap.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity          |
//! |------------------|---------------------|
//! | `insert`         | O(log n)            |
//! | `extract_min`    | O(log n)            |
//! | `peek`           | O(1)                |
//! | `From<Vec<T>>`   | O(n)                |
//! | `append`         | O(m log(n + m)) or O(n + m) |
//! | `into_sorted_vec`| O(n log n), in place |
//!
//! # Heap Property
//!
//! For every index `i > 0`, `data[parent(i)] <= data[i]` under the heap's
//! comparator. It holds before and after every public operation.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::binary::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(10);
//! heap.insert(3);
//! heap.insert(12);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.extract_min(), Some(3));
//! assert_eq!(heap.extract_min(), Some(10));
//! assert_eq!(heap.extract_min(), Some(12));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::traits::Heap;
use compare::{natural, Compare, Natural};
use log::{debug, trace};
use std::fmt;
use std::slice;
use std::vec;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap over a contiguous buffer
///
/// Elements are owned exclusively by the heap. Extraction never releases the
/// buffer's capacity on its own; use [`shrink_to_fit`](MinHeap::shrink_to_fit)
/// to do so explicitly.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the comparator,
/// changes while it is in the heap.
#[derive(Clone)]
pub struct MinHeap<T, C: Compare<T> = Natural<T>> {
    /// Implicit binary tree in level order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by the natural order of its elements
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap with room for `capacity` elements before it
    /// needs to grow
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use compare::{natural, Compare};
    /// use rust_min_heap::binary::MinHeap;
    ///
    /// // Reversing the comparator turns the min-heap into a max-heap
    /// let mut heap = MinHeap::with_comparator(natural().rev());
    /// heap.insert(1);
    /// heap.insert(5);
    /// heap.insert(3);
    /// assert_eq!(heap.extract_min(), Some(5));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap out of an arbitrary vector in O(n)
    ///
    /// The vector's buffer is reused as the heap's storage.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: vec, cmp };
        heap.rebuild();
        heap
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Releases any unused buffer capacity
    pub fn shrink_to_fit(&mut self) {
        if self.data.capacity() > self.data.len() {
            debug!(
                "shrinking heap storage from {} to {} slots",
                self.data.capacity(),
                self.data.len()
            );
        }
        self.data.shrink_to_fit();
    }

    /// Returns the smallest element without removing it, or `None` if the
    /// heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts `value` into the heap
    ///
    /// The value is placed in the first empty slot and bubbled up towards the
    /// root while its parent is strictly greater.
    ///
    /// # Time Complexity
    /// O(log n), amortized over buffer growth
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        self.sift_up(last);
        self.check_invariant();
    }

    /// Removes and returns the smallest element, or `None` if the heap is
    /// empty
    ///
    /// The last element is moved into the root and trickled down, swapping
    /// with the smaller child (the left one on ties) until both children are
    /// no smaller than it.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            let end = self.data.len();
            self.sift_down_range(0, end);
        }

        self.check_invariant();
        Some(min)
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// `other`'s elements are reordered by this heap's comparator. Depending on
    /// the relative sizes, the elements are either inserted one by one or the
    /// combined storage is rebuilt from scratch, whichever is cheaper. `other`
    /// keeps its capacity.
    pub fn append(&mut self, other: &mut Self) {
        if other.data.is_empty() {
            return;
        }

        let existing = self.data.len();
        let incoming = other.data.len();

        if Self::better_to_rebuild(existing, incoming) {
            debug!(
                "append: rebuilding {} elements ({} incoming)",
                existing + incoming,
                incoming
            );
            self.data.append(&mut other.data);
            self.rebuild();
        } else {
            trace!("append: inserting {incoming} elements into {existing}");
            self.data.reserve(incoming);
            for value in other.data.drain(..) {
                self.data.push(value);
                let last = self.data.len() - 1;
                self.sift_up(last);
            }
        }

        self.check_invariant();
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Removes every element, yielding them in storage order
    ///
    /// The heap is empty once the iterator is dropped, and keeps its capacity.
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Returns an iterator over the elements in storage (level) order
    ///
    /// Only the first element is guaranteed to be the minimum.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    ///
    /// Sorting happens in place: the minimum is repeatedly swapped to the end
    /// of the shrinking heap region, and the result is reversed at the end.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.data.reverse();
        self.data
    }

    /// Returns true if the heap property holds at every index
    ///
    /// Intended for tests; this walks the whole storage.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len())
            .all(|i| self.cmp.compares_le(&self.data[parent(i)], &self.data[i]))
    }

    /// Restores the heap property over the whole storage in O(n)
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        for index in (0..len / 2).rev() {
            self.sift_down_range(index, len);
        }
        trace!("heapified {len} elements");
        self.check_invariant();
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.cmp.compares_lt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property, considering
    /// only the first `end` slots
    fn sift_down_range(&mut self, mut index: usize, end: usize) {
        loop {
            let left = left(index);
            if left >= end {
                break;
            }

            let right = right(index);
            let child = if right < end && self.cmp.compares_lt(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if self.cmp.compares_lt(&self.data[child], &self.data[index]) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Rebuilding touches every element about twice, while incremental
    /// insertion costs up to log2(total) comparisons per incoming element.
    fn better_to_rebuild(existing: usize, incoming: usize) -> bool {
        let total = existing.saturating_add(incoming);
        total.saturating_mul(2) < incoming.saturating_mul(total.ilog2() as usize)
    }

    #[inline]
    fn check_invariant(&self) {
        #[cfg(feature = "check-invariants")]
        assert!(self.is_valid(), "heap property violated");
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for MinHeap<T, C> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        MinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min()
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> From<MinHeap<T, C>> for Vec<T> {
    fn from(heap: MinHeap<T, C>) -> Self {
        heap.into_vec()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
