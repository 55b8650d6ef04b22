//! Throughput benchmarks for `MinHeap`
//!
//! Compares `MinHeap` against `std::collections::BinaryHeap<Reverse<T>>` on
//! the same workloads through the shared `Heap` trait.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only the push/pop workload
//! cargo bench --bench heap_bench -- 'push_pop/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_min_heap::{Heap, MinHeap};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 20];

fn workload(len: usize) -> Vec<u64> {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

/// Push everything, then pop everything
fn push_then_drain<H: Heap<u64>>(values: &[u64]) -> u64 {
    let mut heap = H::new();
    for &value in values {
        heap.push(value);
    }
    let mut checksum = 0u64;
    while let Some(value) = heap.pop() {
        checksum = checksum.wrapping_add(value);
    }
    checksum
}

/// Keep the heap at a steady size while cycling elements through it
fn steady_state<H: Heap<u64>>(values: &[u64]) -> u64 {
    let mut heap = H::new();
    let (warm, rest) = values.split_at(values.len() / 2);
    for &value in warm {
        heap.push(value);
    }
    let mut checksum = 0u64;
    for &value in rest {
        heap.push(value);
        if let Some(min) = heap.pop() {
            checksum = checksum.wrapping_add(min);
        }
    }
    checksum
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in SIZES {
        let values = workload(size);
        let label = format!("2^{}", size.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("min_heap", &label), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain::<MinHeap<u64>>(vs)));
        });
        group.bench_with_input(BenchmarkId::new("std_binary_heap", &label), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain::<BinaryHeap<Reverse<u64>>>(vs)));
        });
    }

    group.finish();
}

fn benchmark_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state");

    for size in SIZES {
        let values = workload(size);
        let label = format!("2^{}", size.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("min_heap", &label), &values, |b, vs| {
            b.iter(|| black_box(steady_state::<MinHeap<u64>>(vs)));
        });
        group.bench_with_input(BenchmarkId::new("std_binary_heap", &label), &values, |b, vs| {
            b.iter(|| black_box(steady_state::<BinaryHeap<Reverse<u64>>>(vs)));
        });
    }

    group.finish();
}

fn benchmark_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");

    for size in SIZES {
        let values = workload(size);
        let label = format!("2^{}", size.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("min_heap", &label), &values, |b, vs| {
            b.iter(|| black_box(MinHeap::from(vs.clone())));
        });
        group.bench_with_input(BenchmarkId::new("std_binary_heap", &label), &values, |b, vs| {
            b.iter(|| {
                black_box(BinaryHeap::from(
                    vs.iter().copied().map(Reverse).collect::<Vec<_>>(),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_steady_state,
    benchmark_heapify
);
criterion_main!(benches);
