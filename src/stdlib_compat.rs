//! Standard library compatibility layer
//!
//! Implements the crate's [`Heap`] trait for `std::collections::BinaryHeap`
//! wrapped in [`Reverse`], which turns the standard max-heap into a min-heap.
//! This lets generic code (and the test suites) run the same scenario against
//! both [`MinHeap`](crate::binary::MinHeap) and the standard library.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use std::collections::BinaryHeap;
//! use rust_min_heap::Heap;
//!
//! fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
//!     let mut out = Vec::new();
//!     while let Some(value) = heap.pop() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut heap: BinaryHeap<Reverse<i32>> = Heap::new();
//! Heap::push(&mut heap, 5);
//! Heap::push(&mut heap, 3);
//! assert_eq!(drain(heap), vec![3, 5]);
//! ```

use crate::traits::Heap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

impl<T: Ord> Heap<T> for BinaryHeap<Reverse<T>> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, Reverse(item));
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self).map(|Reverse(item)| item)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self).map(|Reverse(item)| item)
    }
}
