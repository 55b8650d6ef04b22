//! Bounded proofs for `MinHeap`
//!
//! Each proof drives the heap with symbolic values and checks the heap
//! property, size accounting, and the order of extracted elements.

#[cfg(kani)]
use rust_min_heap::MinHeap;

/// Proof: the heap property holds after every insert
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_preserves_heap_property() {
    let mut heap: MinHeap<u8> = MinHeap::new();

    for _ in 0..4 {
        heap.insert(kani::any());
        assert!(heap.is_valid());
    }
    assert!(heap.len() == 4);
}

/// Proof: extract_min returns the minimum of everything inserted
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_returns_minimum() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let min = a.min(b).min(c);
    assert!(heap.peek() == Some(&min));
    assert!(heap.extract_min() == Some(min));
    assert!(heap.is_valid());
    assert!(heap.len() == 2);
}

/// Proof: draining four symbolic values yields them in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_drain_is_sorted() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    for _ in 0..4 {
        heap.insert(kani::any());
    }

    let mut last = 0u8;
    for _ in 0..4 {
        let value = heap.extract_min().expect("four values were inserted");
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}

/// Proof: extracting from an empty heap is a no-op returning None
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_empty_extract_is_noop() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    let value: u32 = kani::any();

    heap.insert(value);
    assert!(heap.extract_min() == Some(value));
    assert!(heap.extract_min().is_none());
    assert!(heap.extract_min().is_none());
    assert!(heap.peek().is_none());
    assert!(heap.is_empty());
}
