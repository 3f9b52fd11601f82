//! Benchmarks des conversions et du test de polygone simple

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use marsgeo::{convert, is_simple_polygon, Frame, Point2D};

/// Grille régulière de points sur la Chine de l'Est
fn grid(n: usize) -> Vec<Point2D> {
    (0..n)
        .flat_map(|i| {
            (0..n).map(move |j| (100.0 + 25.0 * i as f64 / n as f64, 20.0 + 25.0 * j as f64 / n as f64))
        })
        .collect()
}

/// Polygone régulier à `n` sommets (toujours simple)
fn regular_polygon(n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|k| {
            let a = std::f64::consts::TAU * k as f64 / n as f64;
            (116.4 + 0.1 * a.cos(), 39.9 + 0.1 * a.sin())
        })
        .collect()
}

fn bench_convert(c: &mut Criterion) {
    let points = grid(100);

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(points.len() as u64));

    for (from, to) in [
        (Frame::Wgs84, Frame::Gcj02),
        (Frame::Gcj02, Frame::Wgs84),
        (Frame::Gcj02, Frame::Bd09),
        (Frame::Wgs84, Frame::Bd09),
    ] {
        group.bench_with_input(
            BenchmarkId::new(format!("{}->{}", from, to), points.len()),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        black_box(convert(black_box(p), from, to));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_simple_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_simple_polygon");

    for n in [10, 100, 500] {
        let polygon = regular_polygon(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &polygon, |b, polygon| {
            b.iter(|| black_box(is_simple_polygon(black_box(polygon))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_simple_polygon);
criterion_main!(benches);
