use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use skyglobe_geo::*;

fn bench_to_cartesian(c: &mut Criterion) {
    c.bench_function("to_cartesian", |bencher| {
        bencher.iter(|| to_cartesian(black_box(48.85), black_box(2.35), black_box(103.0)))
    });
}

fn bench_to_geodetic(c: &mut Criterion) {
    let p = black_box(DVec3::new(-67.4, 77.6, 2.8));
    c.bench_function("to_geodetic", |bencher| bencher.iter(|| to_geodetic(black_box(p))));
}

fn bench_surface_distance(c: &mut Criterion) {
    let a = black_box(GeoCoord::new(48.85, 2.35));
    let b = black_box(GeoCoord::new(40.71, -74.0));
    c.bench_function("surface_distance", |bencher| {
        bencher.iter(|| a.surface_distance_to(&b, black_box(100.0)))
    });
}

criterion_group!(
    benches,
    bench_to_cartesian,
    bench_to_geodetic,
    bench_surface_distance
);
criterion_main!(benches);
