//! Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap priority queue with a
//! pluggable ordering, usable anywhere elements need to be processed
//! smallest-first (schedulers, ranking, event queues).
//!
//! # Features
//!
//! - **MinHeap**: O(log n) insert and extract-min, O(1) peek, O(n) heapify from a `Vec`
//! - **Pluggable ordering**: natural `Ord` order by default, or any [`Compare`] comparator,
//!   including closures; `Compare::rev` turns it into a max-heap
//! - **PartialMinHeap**: fail-fast insertion for `PartialOrd` values such as floats
//! - **Heap trait**: a common interface, also implemented for `BinaryHeap<Reverse<T>>`
//!
//! An empty heap is signalled with `None`; no operation panics on empty input.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(10);
//! heap.insert(3);
//! heap.insert(12);
//!
//! let mut drained = Vec::new();
//! while let Some(value) = heap.extract_min() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![3, 10, 12]);
//! ```
//!
//! # Cargo Features
//!
//! - `check-invariants`: assert the full heap property after every mutating
//!   operation. This is O(n) per call and meant for tests and fuzzing.

pub mod binary;
pub mod partial;
pub mod stdlib_compat;
pub mod traits;

pub use binary::MinHeap;
pub use compare::{natural, Compare, Natural};
pub use partial::PartialMinHeap;
pub use traits::{Heap, HeapError};
