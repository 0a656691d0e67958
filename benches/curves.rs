//! Benchmarks for curve evaluation and degree change.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bezierkit::curves::{derivative, elevate, reduce, DeCasteljau};
use bezierkit::Point3;

/// Control polygon of the given degree zig-zagging through space.
fn zigzag(degree: usize) -> Vec<Point3<f64>> {
    (0..=degree)
        .map(|i| {
            let x = i as f64;
            let y = if i % 2 == 0 { 0.0 } else { 3.0 };
            Point3::new(x, y, (i % 3) as f64)
        })
        .collect()
}

fn bench_eval_by_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("casteljau_eval");

    for degree in [1, 3, 6, 10] {
        let points = zigzag(degree);
        let mut evaluator = DeCasteljau::with_capacity(points.len());

        group.bench_with_input(BenchmarkId::new("degree", degree), &points, |b, pts| {
            b.iter(|| evaluator.eval(black_box(pts), black_box(0.37)))
        });
    }

    group.finish();
}

fn bench_eval_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("casteljau_eval_batch");

    let points = zigzag(3);
    let mut evaluator = DeCasteljau::with_capacity(points.len());

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let t = i as f64 / count as f64;
                    let _ = evaluator.eval(&points, black_box(t));
                }
            })
        });
    }

    group.finish();
}

fn bench_derivative(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivative");

    for degree in [3, 10] {
        let points = zigzag(degree);
        group.bench_with_input(BenchmarkId::new("degree", degree), &points, |b, pts| {
            b.iter(|| derivative(black_box(pts), black_box(0.5)))
        });
    }

    group.finish();
}

fn bench_degree_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree_change");

    for degree in [3, 6, 10] {
        let points = zigzag(degree);

        group.bench_with_input(BenchmarkId::new("elevate", degree), &points, |b, pts| {
            b.iter(|| elevate(black_box(pts)))
        });
        group.bench_with_input(BenchmarkId::new("reduce", degree), &points, |b, pts| {
            b.iter(|| reduce(black_box(pts)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_eval_by_degree,
    bench_eval_batch,
    bench_derivative,
    bench_degree_change
);
criterion_main!(benches);
