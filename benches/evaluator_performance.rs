//! Performance benchmarks for concentration evaluators
//!
//! Compares the cost of the evaluator families on identical grids.
//!
//! # What We're Measuring
//!
//! 1. **Instantaneous point**: one kernel evaluation per grid node
//! 2. **Continuous point**: `QUADRATURE_STEPS` kernel evaluations per node
//! 3. **Continuous area**: `QUADRATURE_STEPS` × 25 sub-points per node
//! 4. **Short duration**: twice the continuous cost after the release ends
//!
//! # Expected Results
//!
//! ```text
//! instantaneous : 1×
//! continuous    : ≈ 100×
//! area          : ≈ 2 500×
//! short         : ≈ 2× continuous
//! ```
//!
//! Time should scale linearly with grid nodes. With `--features parallel`
//! grids above `PARALLEL_THRESHOLD` nodes spread over all cores.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench evaluator_performance
//! cargo bench --bench evaluator_performance --features parallel
//! cargo bench --bench evaluator_performance area
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plume_rs::physics::{Dispersion, QueryGrid, Release, TransportParameters};
use plume_rs::solver::{Dimensionality, Scenario, SourceGeometry};
use std::hint::black_box;
use std::time::Duration;

// =================================================================================================
// Fixtures
// =================================================================================================

fn params() -> TransportParameters {
    TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.05), 0.1).with_decay(0.001)
}

/// Square mesh with `n × n` nodes over 200 m × 100 m
fn mesh(n: usize) -> QueryGrid {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 200.0 / (n - 1) as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| -50.0 + i as f64 * 100.0 / (n - 1) as f64).collect();
    QueryGrid::mesh_2d(&x, &y)
}

fn scenario(geometry: SourceGeometry, release: Release) -> Scenario {
    Scenario::new(Dimensionality::Two, geometry, release, params())
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Scaling with grid size for the three main evaluator families
fn benchmark_grid_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid scaling");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("instantaneous", scenario(SourceGeometry::Point, Release::Instantaneous { mass: 100.0 })),
        ("continuous", scenario(SourceGeometry::Point, Release::Continuous { concentration: 100.0, flow: 0.5 })),
        (
            "area",
            scenario(
                SourceGeometry::Area { length: 20.0, width: 10.0 },
                Release::Continuous { concentration: 100.0, flow: 0.5 },
            ),
        ),
    ];

    for (label, scenario) in cases.iter() {
        for n in [10, 20, 40] {
            let grid = mesh(n);
            group.bench_with_input(BenchmarkId::new(*label, n * n), &grid, |b, grid| {
                b.iter(|| scenario.evaluate(black_box(grid), black_box(365.0)).unwrap())
            });
        }
    }

    group.finish();
}

/// Continuous versus short-duration on the same grid
fn benchmark_short_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Short duration");
    let grid = mesh(20);

    let long = scenario(SourceGeometry::Point, Release::Continuous { concentration: 100.0, flow: 0.5 });
    let brief = scenario(
        SourceGeometry::Point,
        Release::ShortDuration { concentration: 100.0, flow: 0.5, duration: 100.0 },
    );

    group.bench_function("continuous", |b| {
        b.iter(|| long.evaluate(black_box(&grid), black_box(365.0)).unwrap())
    });
    group.bench_function("short", |b| {
        b.iter(|| brief.evaluate(black_box(&grid), black_box(365.0)).unwrap())
    });

    group.finish();
}

/// 3D mesh evaluation
fn benchmark_volume(c: &mut Criterion) {
    let x: Vec<f64> = (0..40).map(|i| i as f64 * 2.5).collect();
    let y: Vec<f64> = (0..30).map(|i| -15.0 + i as f64).collect();
    let z: Vec<f64> = (0..20).map(|i| -10.0 + i as f64).collect();
    let grid = QueryGrid::mesh_3d(&x, &y, &z);

    let scenario = Scenario::new(
        Dimensionality::Three,
        SourceGeometry::Point,
        Release::Instantaneous { mass: 100.0 },
        params(),
    );

    c.bench_function("3D instantaneous 24000 nodes", |b| {
        b.iter(|| scenario.evaluate(black_box(&grid), black_box(100.0)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_grid_scaling,
    benchmark_short_duration,
    benchmark_volume
);
criterion_main!(benches);
