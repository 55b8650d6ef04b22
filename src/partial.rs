//! Min-heap over partially ordered values
//!
//! [`MinHeap`] requires a total order, which the type system guarantees for
//! [`Ord`] elements and comparator closures. Types that are only
//! [`PartialOrd`], floating-point numbers in particular, can hold values that
//! do not compare against anything (NaN). [`PartialMinHeap`] admits such types
//! but checks every value before it is stored:
//!
//! - the value must compare equal to itself, which rules out NaN;
//! - the value must be comparable with every element already stored.
//!
//! Together these keep every pair of stored elements comparable, so the
//! admitted values form a total order and draining the heap yields them in
//! non-decreasing order. The second check walks the whole heap, which makes
//! `try_insert` O(n) rather than O(log n).
//!
//! A value that fails either check is rejected with
//! [`HeapError::Incomparable`] and the heap is left exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{HeapError, PartialMinHeap};
//!
//! let mut heap = PartialMinHeap::new();
//! heap.try_insert(2.5).unwrap();
//! heap.try_insert(-1.0).unwrap();
//! assert_eq!(heap.try_insert(f64::NAN), Err(HeapError::Incomparable));
//!
//! assert_eq!(heap.len(), 2);
//! assert_eq!(heap.extract_min(), Some(-1.0));
//! ```

use crate::binary::MinHeap;
use crate::traits::HeapError;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::slice;

type PartialComparator<T> = fn(&T, &T) -> Ordering;

/// Orders two admitted values
///
/// Every stored pair was checked comparable on admission, so the fallback is
/// never taken for `PartialOrd` implementations that are transitive.
fn admitted_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// A binary min-heap whose insertions are validated against a partial order
#[derive(Clone)]
pub struct PartialMinHeap<T: PartialOrd> {
    inner: MinHeap<T, PartialComparator<T>>,
}

impl<T: PartialOrd> PartialMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            inner: MinHeap::with_comparator(admitted_order::<T> as PartialComparator<T>),
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: MinHeap::with_capacity_and_comparator(
                capacity,
                admitted_order::<T> as PartialComparator<T>,
            ),
        }
    }

    /// Inserts `value`, or rejects it if it cannot be ordered
    ///
    /// # Errors
    /// Returns [`HeapError::Incomparable`] if `value` is not equal to itself
    /// or is incomparable with any stored element. The heap is not modified
    /// in that case.
    ///
    /// # Time Complexity
    /// O(n): the value is compared against every stored element.
    pub fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        if value.partial_cmp(&value) != Some(Ordering::Equal) {
            debug!("rejecting value that does not compare equal to itself");
            return Err(HeapError::Incomparable);
        }

        if self
            .inner
            .iter()
            .any(|stored| value.partial_cmp(stored).is_none())
        {
            debug!(
                "rejecting value incomparable with a stored element (heap size {})",
                self.inner.len()
            );
            return Err(HeapError::Incomparable);
        }

        self.inner.insert(value);
        Ok(())
    }

    /// Removes and returns the smallest element, or `None` if empty
    pub fn extract_min(&mut self) -> Option<T> {
        self.inner.extract_min()
    }

    /// Returns the smallest element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements in storage order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns true if every parent is comparable with, and no greater than,
    /// each of its children
    pub fn is_valid(&self) -> bool {
        let data = self.inner.iter().as_slice();
        (1..data.len()).all(|i| {
            matches!(
                data[(i - 1) / 2].partial_cmp(&data[i]),
                Some(Ordering::Less | Ordering::Equal)
            )
        })
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner.into_sorted_vec()
    }
}

impl<T: PartialOrd> Default for PartialMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + fmt::Debug> fmt::Debug for PartialMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
