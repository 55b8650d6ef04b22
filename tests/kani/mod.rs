//! Kani proof harnesses
//!
//! - `min_heap_proofs.rs`: invariant, ordering, and emptiness proofs for `MinHeap`

#[cfg(kani)]
#[path = "min_heap_proofs.rs"]
mod min_heap_proofs;
