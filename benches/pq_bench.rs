//! Throughput benchmarks for the priority queues
//!
//! ```bash
//! cargo bench --bench pq_bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use priority_queues::{
    AddressableQueue, BinaryPQ, Less, PairingPQ, PriorityQueue, SortedPQ, UnorderedPQ,
};
use std::hint::black_box;

/// Deterministic pseudo-random values so every run sees the same input
fn input(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 1_000_000
        })
        .collect()
}

fn push_pop_all<H: PriorityQueue<u64, Less>>(values: &[u64]) -> u64 {
    let mut pq = H::with_comparator(Less);
    for &v in values {
        pq.push(v);
    }
    let mut sum = 0;
    while let Some(v) = pq.pop() {
        sum ^= v;
    }
    sum
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for size in [100usize, 1_000, 10_000] {
        let values = input(size);
        group.bench_with_input(BenchmarkId::new("Binary", size), &values, |b, v| {
            b.iter(|| push_pop_all::<BinaryPQ<u64>>(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("Pairing", size), &values, |b, v| {
            b.iter(|| push_pop_all::<PairingPQ<u64>>(black_box(v)))
        });
        if size <= 1_000 {
            group.bench_with_input(BenchmarkId::new("Sorted", size), &values, |b, v| {
                b.iter(|| push_pop_all::<SortedPQ<u64>>(black_box(v)))
            });
            group.bench_with_input(BenchmarkId::new("Unordered", size), &values, |b, v| {
                b.iter(|| push_pop_all::<UnorderedPQ<u64>>(black_box(v)))
            });
        }
    }
    group.finish();
}

fn bench_update_priorities(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_priorities");
    for size in [1_000usize, 10_000] {
        let values = input(size);
        group.bench_with_input(BenchmarkId::new("Binary", size), &values, |b, v| {
            let mut pq: BinaryPQ<u64> = v.iter().copied().collect();
            b.iter(|| {
                for x in pq.iter_mut() {
                    *x = (*x * 31) % 1_000_003;
                }
                pq.update_priorities();
                black_box(pq.top().copied())
            })
        });
        group.bench_with_input(BenchmarkId::new("Pairing", size), &values, |b, v| {
            let mut pq: PairingPQ<u64> = v.iter().copied().collect();
            b.iter(|| {
                for x in pq.iter_mut() {
                    *x = (*x * 31) % 1_000_003;
                }
                pq.update_priorities();
                black_box(pq.top().copied())
            })
        });
    }
    group.finish();
}

fn bench_update_elt(c: &mut Criterion) {
    let values = input(10_000);
    c.bench_function("pairing_update_elt_10000", |b| {
        b.iter(|| {
            let mut pq = PairingPQ::new();
            let handles: Vec<_> = values.iter().map(|&v| pq.add_node(v)).collect();
            for (i, handle) in handles.iter().enumerate() {
                let raised = 1_000_000 + i as u64;
                pq.update_elt(*handle, raised).ok();
            }
            black_box(pq.pop())
        })
    });
}

criterion_group!(benches, bench_push_pop, bench_update_priorities, bench_update_elt);
criterion_main!(benches);
