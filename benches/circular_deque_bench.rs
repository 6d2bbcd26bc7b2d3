//! Benchmark for CircularDeque vs standard VecDeque.
//!
//! Measures growth from the minimum capacity, alternating-end traffic and
//! mid-ring removal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linea::deque::CircularDeque;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// Growth Benchmark
// =============================================================================

fn benchmark_growth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("growth");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("CircularDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque: CircularDeque<usize> = CircularDeque::with_capacity(0);
                for index in 0..size {
                    if deque.add_last(black_box(index)).is_err() {
                        break;
                    }
                }
                black_box(deque)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::new();
                for index in 0..size {
                    deque.push_back(black_box(index));
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Alternating ends Benchmark
// =============================================================================

fn benchmark_alternating(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("alternating");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("CircularDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque: CircularDeque<usize> = CircularDeque::new();
                for index in 0..size {
                    let _ = deque.push(black_box(index));
                    let _ = deque.offer(black_box(index));
                    black_box(deque.poll_last());
                }
                black_box(deque)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::new();
                for index in 0..size {
                    deque.push_front(black_box(index));
                    deque.push_back(black_box(index));
                    black_box(deque.pop_back());
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Occurrence removal Benchmark
// =============================================================================

fn benchmark_remove_occurrence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_occurrence");

    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("CircularDeque", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (0..size).collect::<CircularDeque<usize>>(),
                |mut deque| {
                    for value in (0..size).step_by(3) {
                        black_box(deque.remove_first_occurrence(&value));
                    }
                    deque
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_growth,
    benchmark_alternating,
    benchmark_remove_occurrence
);

criterion_main!(benches);
