// Sieve and Fibonacci Benchmarks - Rust
//
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sieve_benchmarks::{
    basic_sieve, fibonacci_doubling_mod, fibonacci_iterative, fibonacci_iterative_mod,
    fibonacci_recursive, odd_sieve, segmented_sieve, SegmentedSieve, SieveConfig,
};

// ============================================================================
// Sieves
// ============================================================================

fn benchmark_sieves(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for limit in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("basic", limit), &limit, |b, &limit| {
            b.iter(|| basic_sieve(black_box(limit)))
        });
        group.bench_with_input(BenchmarkId::new("optimized", limit), &limit, |b, &limit| {
            b.iter(|| odd_sieve(black_box(limit)))
        });
        group.bench_with_input(BenchmarkId::new("segmented", limit), &limit, |b, &limit| {
            b.iter(|| segmented_sieve(black_box(limit)))
        });
    }
    group.finish();
}

fn benchmark_segment_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_size");
    for segment_size in [1_000usize, 10_000, 100_000] {
        let sieve = SegmentedSieve::new(SieveConfig::default().with_segment_size(segment_size))
            .expect("non-zero segment size");
        group.bench_with_input(
            BenchmarkId::from_parameter(segment_size),
            &sieve,
            |b, sieve| b.iter(|| sieve.count(black_box(1_000_000))),
        );
    }
    group.finish();
}

// ============================================================================
// Fibonacci
// ============================================================================

fn benchmark_fibonacci(c: &mut Criterion) {
    c.bench_function("fibonacci_recursive_20", |b| {
        b.iter(|| fibonacci_recursive(black_box(20)))
    });
    c.bench_function("fibonacci_iterative_90", |b| {
        b.iter(|| fibonacci_iterative(black_box(90)))
    });
    c.bench_function("fibonacci_iterative_mod_10000", |b| {
        b.iter(|| fibonacci_iterative_mod(black_box(10_000), black_box(1_000_000)))
    });
    c.bench_function("fibonacci_doubling_mod_50000", |b| {
        b.iter(|| fibonacci_doubling_mod(black_box(50_000), black_box(1_000_000)))
    });
}

criterion_group!(
    benches,
    benchmark_sieves,
    benchmark_segment_sizes,
    benchmark_fibonacci
);
criterion_main!(benches);
