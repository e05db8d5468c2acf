//! Benchmarks for the combination finder.
//!
//! Run with: cargo bench -p tapeplanner

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tapeplanner::{Candidates, backtrack, find_combinations};

fn bench_single_tape(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_tape");

    // 961 matches on the first 2:1 try, 1700 only after 2:1 and 5:2 are exhausted
    for length in [961.0, 1200.0, 1700.0] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| find_combinations(black_box(&[length])));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let candidates = Candidates::new();

    let inputs: [(&str, &[f64]); 4] = [
        ("direct_pair", &[620.0, 400.0]),
        ("backtrack_two", &[661.0, 400.0]),
        ("backtrack_three", &[661.0, 661.0, 400.0]),
        ("no_solution", &[661.0, 661.0]),
    ];

    for (name, lengths) in inputs {
        group.bench_with_input(BenchmarkId::new("backtrack", name), lengths, |b, lengths| {
            b.iter(|| backtrack(black_box(lengths), &candidates));
        });
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    c.bench_function("candidates_new", |b| b.iter(Candidates::new));
}

criterion_group!(benches, bench_single_tape, bench_search, bench_candidates);
criterion_main!(benches);
