//! Benchmark for LazyList against eager Vec pipelines.
//!
//! Measures the per-cell cost of suspension and memoization for common
//! pipelines, and the benefit of laziness when only a prefix is consumed.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazylist::list::LazyList;
use std::hint::black_box;

// =============================================================================
// Construction Benchmark
// =============================================================================

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("construction");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LazyList::from_iter", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box((0..size).collect::<LazyList<i64>>()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LazyList::range forced", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(LazyList::range(0, size - 1).length()));
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| black_box((0..size).collect::<Vec<i64>>()));
        });
    }

    group.finish();
}

// =============================================================================
// Pipeline Benchmark
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_fold");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("LazyList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total = LazyList::range(0, size - 1)
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .fold_left(0, |sum, x| sum + x);
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total: i64 = (0..size)
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Prefix Benchmark
// =============================================================================

fn benchmark_prefix_of_infinite(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prefix_of_infinite");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("take", count), &count, |bencher, &count| {
            bencher.iter(|| {
                let squares = LazyList::range(1, i64::MAX).map(|x| x * x);
                black_box(squares.take(count).to_vec())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Memoized Traversal Benchmark
// =============================================================================

fn benchmark_memoized_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_traversal");

    for size in [100, 1000, 10000] {
        let list = LazyList::range(0, size - 1).map(|x| x + 1);
        let _ = list.length();
        group.bench_with_input(BenchmarkId::new("iter", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.iter().filter_map(Result::ok).sum::<i64>()));
        });
    }

    group.finish();
}

// =============================================================================
// Combinatorics Benchmark
// =============================================================================

fn benchmark_combinatorics(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinatorics");

    for size in [4, 8, 12] {
        group.bench_with_input(
            BenchmarkId::new("combinations", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(LazyList::range(1, size).combinations().length()));
            },
        );
    }

    for size in [3, 5, 7] {
        group.bench_with_input(
            BenchmarkId::new("permutations", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(LazyList::range(1, size).permutations().length()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_pipeline,
    benchmark_prefix_of_infinite,
    benchmark_memoized_traversal,
    benchmark_combinatorics
);

criterion_main!(benches);
