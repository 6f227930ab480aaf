//! Benchmarks for the sliding puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use slider_puzzle::solver::manhattan_distance;
use slider_puzzle::{is_solvable, shuffle_solvable_with, solve, Grid, DEFAULT_SHUFFLE_STEPS};

/// The two hardest 3x3 boards need 31 moves; this is one of them.
const HARDEST_3X3: &str = "8 6 7/2 5 4/3 0 1";

/// Benchmark solving a fixed worst-case 3x3 board.
fn bench_solve_hardest_3x3(c: &mut Criterion) {
    let start: Grid = HARDEST_3X3.parse().unwrap();

    c.bench_function("solve_hardest_3x3", |b| {
        b.iter(|| solve(black_box(&start)))
    });
}

/// Benchmark solving shallow 4x4 scrambles.
fn bench_solve_4x4(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let start = shuffle_solvable_with(4, 40, &mut rng);

    let mut group = c.benchmark_group("4x4");
    group.sample_size(10);
    group.bench_function("solve_40_step_scramble", |b| {
        b.iter(|| solve(black_box(&start)))
    });
    group.finish();
}

/// Benchmark a full-length shuffle of a 5x5 board.
fn bench_shuffle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("shuffle_5x5", |b| {
        b.iter(|| shuffle_solvable_with(black_box(5), DEFAULT_SHUFFLE_STEPS, &mut rng))
    });
}

/// Benchmark the heuristic and the parity test on an 8x8 board.
fn bench_heuristics(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = shuffle_solvable_with(8, DEFAULT_SHUFFLE_STEPS, &mut rng);

    c.bench_function("manhattan_8x8", |b| {
        b.iter(|| manhattan_distance(black_box(&grid)))
    });
    c.bench_function("is_solvable_8x8", |b| {
        b.iter(|| is_solvable(black_box(&grid)))
    });
}

criterion_group!(
    benches,
    bench_solve_hardest_3x3,
    bench_solve_4x4,
    bench_shuffle,
    bench_heuristics
);
criterion_main!(benches);
