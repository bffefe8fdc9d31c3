//! Criterion benchmarks for neumark-curve critical operations.
//!
//! Covers: series evaluation (shallow and worst case), inverse bisection,
//! and the two delta operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neumark_core::constants::SATURATION_THRESHOLD;
use neumark_core::U256;
use neumark_curve::{cumulative, cumulative_inverse, incremental, incremental_inverse};

const UNIT: u128 = 1_000_000_000_000_000_000;
const THRESHOLD: u128 = 8_300_000_000_000_000_000_000_000_000;

fn bench_cumulative(c: &mut Criterion) {
    let shallow = U256::from(1_000 * UNIT);
    let worst = U256::from(THRESHOLD - 1);

    c.bench_function("cumulative_shallow", |b| {
        b.iter(|| cumulative(black_box(shallow)))
    });
    c.bench_function("cumulative_worst_case", |b| {
        b.iter(|| cumulative(black_box(worst)))
    });
}

fn bench_cumulative_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x4e4d4b);
    let inputs: Vec<U256> = (0..64)
        .map(|_| U256::from(rng.gen_range(0..THRESHOLD)))
        .collect();

    c.bench_function("cumulative_random_64", |b| {
        b.iter(|| {
            for x in &inputs {
                let _ = cumulative(black_box(*x));
            }
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let target = cumulative(U256::from(25_000_000 * UNIT)).unwrap_or_default();

    c.bench_function("cumulative_inverse_full_range", |b| {
        b.iter(|| cumulative_inverse(black_box(target), U256::ZERO, SATURATION_THRESHOLD))
    });
}

fn bench_delta(c: &mut Criterion) {
    let total = U256::from(100_000_000 * UNIT);
    let delta = U256::from(10_000 * UNIT);
    let issued = incremental(total, delta).unwrap_or_default();

    c.bench_function("incremental", |b| {
        b.iter(|| incremental(black_box(total), black_box(delta)))
    });
    c.bench_function("incremental_inverse", |b| {
        b.iter(|| incremental_inverse(black_box(total + delta), black_box(issued)))
    });
}

criterion_group!(
    benches,
    bench_cumulative,
    bench_cumulative_random,
    bench_inverse,
    bench_delta,
);
criterion_main!(benches);
