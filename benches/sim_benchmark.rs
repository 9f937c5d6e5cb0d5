/*
 * Wind Field Simulation Benchmark
 *
 * Measures the per-frame cost of advecting the particle field and of the
 * brute-force particle/obstacle collision scan at several field densities.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use std::time::Duration;

use windfield::obstacle::{Obstacle, ObstacleKind};
use windfield::physics;

// Benchmark the horizontal advection pass
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_particles");

    for rows in [10, 20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, &rows| {
            let particles = physics::populate_grid(rows, 25.0, 1400.0, 1000.0);

            b.iter(|| {
                let mut field = particles.clone();
                physics::advance_particles(&mut field, 2.5, 1400.0);
                black_box(field);
            });
        });
    }

    group.finish();
}

// Benchmark the pairwise collision scan
fn bench_resolve_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");

    for rows in [10, 20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, &rows| {
            let particles = physics::populate_grid(rows, 25.0, 1400.0, 1000.0);

            // A handful of circles spread across the field
            let obstacles: Vec<Obstacle> = (0..8)
                .map(|i| {
                    Obstacle::new(
                        pt2(150.0 * i as f32, 100.0 + 90.0 * i as f32),
                        40.0,
                        rgb(0.8, 0.25, 0.2),
                        ObstacleKind::Circle,
                    )
                })
                .collect();

            b.iter(|| {
                let mut field = particles.clone();
                black_box(physics::resolve_collisions(&mut field, &obstacles));
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_advance, bench_resolve_collisions
}

criterion_main!(benches);
