//! Gram-Schmidt Benchmarks
//!
//! Run with: cargo bench --bench gram_schmidt_ops
//!
//! Benchmarks:
//! - Orthogonalization across dimensions
//! - Orthonormalization across dimensions
//! - Verification predicates
//! - Batched orthonormalization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gram_schmidt::batch::orthonormalize_batch;
use gram_schmidt::{are_linearly_independent, is_orthonormal, orthogonalize, orthonormalize, VectorN};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const BENCHMARK_DURATION_SECS: u64 = 5;
const DIMENSIONS: [usize; 4] = [2, 4, 8, 16];

fn random_basis(dim: usize, seed: u64) -> Vec<VectorN> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..dim)
        .map(|i| {
            let mut row: Vec<f64> = (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
            row[i] += dim as f64;
            VectorN::new(row)
        })
        .collect()
}

fn bench_orthogonalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("GramSchmidt/Orthogonalize");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));

    for &dim in &DIMENSIONS {
        let basis = random_basis(dim, 42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &basis, |b, basis| {
            b.iter(|| black_box(orthogonalize(black_box(basis))))
        });
    }

    group.finish();
}

fn bench_orthonormalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("GramSchmidt/Orthonormalize");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));

    for &dim in &DIMENSIONS {
        let basis = random_basis(dim, 7);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &basis, |b, basis| {
            b.iter(|| black_box(orthonormalize(black_box(basis))))
        });
    }

    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("GramSchmidt/Predicates");

    let basis = random_basis(10, 3);
    let unit = orthonormalize(&basis).expect("random basis is independent");

    group.bench_function("are_linearly_independent/10", |b| {
        b.iter(|| black_box(are_linearly_independent(black_box(&basis))))
    });
    group.bench_function("is_orthonormal/10", |b| {
        b.iter(|| black_box(is_orthonormal(black_box(&unit))))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("GramSchmidt/Batch");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));

    let bases: Vec<Vec<VectorN>> = (0..256).map(|s| random_basis(8, s)).collect();

    group.bench_function("orthonormalize_batch/256x8", |b| {
        b.iter(|| black_box(orthonormalize_batch(black_box(&bases))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_orthogonalize,
    bench_orthonormalize,
    bench_predicates,
    bench_batch
);
criterion_main!(benches);
