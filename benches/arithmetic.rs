//! Benchmarks for sparse matrix arithmetic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_ops::SparseMatrix;

/// Banded n×n matrix with `band` diagonals on each side of the main one
fn create_banded(n: usize, band: usize, seed: i64) -> SparseMatrix<i64> {
    let mut m = SparseMatrix::new(n, n);
    for i in 0..n {
        let lo = i.saturating_sub(band);
        let hi = (i + band + 1).min(n);
        for j in lo..hi {
            let value = ((i * 31 + j * 17) as i64 + seed) % 9 - 4;
            m.set(i, j, value).unwrap();
        }
    }
    m
}

fn bench_add_subtract(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    for &n in &[100, 1_000, 10_000] {
        let a = create_banded(n, 2, 1);
        let b = create_banded(n, 2, 5);

        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("subtract", n), &n, |bench, _| {
            bench.iter(|| black_box(a.subtract(&b).unwrap()))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for &n in &[100, 1_000, 5_000] {
        let a = create_banded(n, 2, 1);
        let b = create_banded(n, 2, 3);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_subtract, bench_multiply);
criterion_main!(benches);
