//! Benchmarks for the packing strategies.

use std::num::NonZeroU32;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use suitcase::packing::{greedy_packing, optimal_packing, rushed_packing, OptimalSearch};
use suitcase::random::random_items;
use suitcase::suitcase::Suitcase;

/// A reproducible 12x12 suitcase with `count` items of side at most 6.
fn instance(count: usize) -> Suitcase {
    let mut rng = SmallRng::seed_from_u64(42);
    let max_side = NonZeroU32::new(6).unwrap();
    Suitcase::new(12, 12, random_items(count, max_side, &mut rng)).unwrap()
}

/// Benchmark the two single-pass strategies on a large instance.
fn bench_heuristics(c: &mut Criterion) {
    let suitcase = instance(200);

    c.bench_function("rushed_200", |b| {
        b.iter_batched(|| suitcase.clone(), |s| rushed_packing(black_box(s)), BatchSize::SmallInput)
    });
    c.bench_function("greedy_200", |b| {
        b.iter_batched(|| suitcase.clone(), |s| greedy_packing(black_box(s)), BatchSize::SmallInput)
    });
}

/// Benchmark the exhaustive search on a small instance.
fn bench_optimal(c: &mut Criterion) {
    let suitcase = instance(7);

    let mut group = c.benchmark_group("optimal");
    group.sample_size(10);
    group.bench_function("exhaustive_7", |b| {
        b.iter_batched(|| suitcase.clone(), |s| optimal_packing(black_box(s)), BatchSize::SmallInput)
    });
    group.bench_function("budget_10k_7", |b| {
        let search = OptimalSearch::with_max_nodes(10_000);
        b.iter_batched(|| suitcase.clone(), |s| search.run(black_box(s)), BatchSize::SmallInput)
    });
    group.finish();
}

criterion_group!(benches, bench_heuristics, bench_optimal);
criterion_main!(benches);
