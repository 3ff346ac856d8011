//! Criterion benchmarks for waypoint ordering.
//!
//! Uses random waypoints inside a city-sized box so route lengths are
//! realistic for the exact and annealing strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waypoint_order::geo::{haversine_distance, Coordinate, DistanceCache};
use waypoint_order::order::{ExactSolver, OrderingInstance};
use waypoint_order::planner::{AlgorithmConfig, RoutePlanner};

fn random_points(n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Coordinate::new(
                rng.random_range(116.20..116.60),
                rng.random_range(39.75..40.05),
            )
        })
        .collect()
}

fn random_instance(waypoints: usize, seed: u64) -> OrderingInstance {
    let points = random_points(waypoints + 2, seed);
    OrderingInstance::new(points[0], &points[2..], points[1], haversine_distance)
}

// ===========================================================================
// Distance
// ===========================================================================

fn bench_haversine(c: &mut Criterion) {
    let points = random_points(2, 1);
    c.bench_function("haversine", |b| {
        b.iter(|| haversine_distance(black_box(points[0]), black_box(points[1])))
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let points = random_points(2, 1);
    let cache = DistanceCache::new();
    cache.get_or_compute(points[0], points[1]);
    c.bench_function("distance_cache_hit", |b| {
        b.iter(|| cache.get_or_compute(black_box(points[1]), black_box(points[0])))
    });
}

// ===========================================================================
// Ordering
// ===========================================================================

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);

    for &n in &[8, 9, 10] {
        let instance = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| black_box(ExactSolver::solve(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[15, 30, 50] {
        let instance = random_instance(n, 42);
        let solver = AlgorithmConfig::default().with_seed(42).annealing_solver(n);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, solver),
            |b, (inst, solver)| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(solver.solve_with_rng(black_box(inst), &mut rng))
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Planner
// ===========================================================================

fn bench_plan_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_route_3x3");
    group.sample_size(10);

    for &n in &[8, 20] {
        let points = random_points(n + 6, 7);
        let planner = RoutePlanner::new(AlgorithmConfig::default().with_seed(7))
            .expect("default config is valid");
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter(|| {
                planner.clear_distance_cache();
                black_box(planner.plan_route(&pts[..3], &pts[6..], &pts[3..6]))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine,
    bench_cache_hit,
    bench_exact,
    bench_annealing,
    bench_plan_route
);
criterion_main!(benches);
