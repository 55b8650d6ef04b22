//! Common traits for heap data structures
//!
//! This module provides the base [`Heap`] trait shared by the heaps in this
//! crate, along with [`HeapError`] for the few operations that can fail.
//!
//! The trait mirrors Rust's standard heap API (`push`/`pop`/`peek`) but with
//! min-heap semantics: `pop` always returns the smallest element according to
//! the heap's ordering.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The value cannot be ordered against itself or against the elements
    /// it would be placed beneath (e.g. a floating-point NaN)
    Incomparable,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Incomparable => {
                write!(f, "value cannot be compared against the heap's elements")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap`, which is a max-heap, implementors return the
/// *smallest* element first. An empty heap is signalled with `None`, never
/// with a panic.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::Heap;
/// use rust_min_heap::binary::MinHeap;
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
