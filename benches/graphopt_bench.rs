//! Criterion benchmarks for u-graphopt solvers.
//!
//! Uses seeded Erdős–Rényi graphs so runs are comparable across builds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_graphopt::codec::SolutionCodec;
use u_graphopt::graph::generate::erdos_renyi;
use u_graphopt::graph::Graph;
use u_graphopt::local_search::{random_assignment, BatchedLocalSearch};
use u_graphopt::problem::{MaxCut, MaximumIndependentSet};
use u_graphopt::sa::{AnnealingConfig, AnnealingRunner};
use u_numflow::random::create_rng;

fn random_graph(n: usize) -> Graph {
    let mut rng = create_rng(7);
    erdos_renyi(n, 8.0 / n as f64, &mut rng).expect("valid graph")
}

// ===========================================================================
// Simulated annealing
// ===========================================================================

fn bench_sa_maxcut(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_maxcut");
    group.sample_size(10);

    for &n in &[100, 500, 1000] {
        let graph = random_graph(n);
        let config = AnnealingConfig::default().with_num_steps(2000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, config), |b, (g, c)| {
            b.iter(|| {
                let result = AnnealingRunner::run_from(&MaxCut, black_box(g), vec![false; n], c);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa_mis(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_mis");
    group.sample_size(10);

    let problem = MaximumIndependentSet::default();
    for &n in &[100, 500] {
        let graph = random_graph(n);
        let config = AnnealingConfig::default().with_num_steps(5000).with_seed(42);
        // exchanges need one selected node to move out
        let start: Vec<bool> = (0..n).map(|i| i == 0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, config), |b, (g, c)| {
            b.iter(|| {
                let result = AnnealingRunner::run_from(&problem, black_box(g), start.clone(), c);
                black_box(result)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Batched local search
// ===========================================================================

fn bench_random_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_search_maxcut");
    group.sample_size(10);

    for &n in &[100, 500] {
        let graph = random_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let mut rng = create_rng(42);
                let population = (0..16).map(|_| random_assignment(n, &mut rng)).collect();
                let mut search = BatchedLocalSearch::new(&MaxCut, g).with_parallel(true);
                search.reset(population).expect("population fits graph");
                black_box(search.random_search(8, 4, 0.3, &mut rng))
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Codec
// ===========================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for &n in &[1000, 10_000] {
        let codec = SolutionCodec::new(n);
        let mut rng = create_rng(3);
        let x = random_assignment(n, &mut rng);
        let text = codec.encode(&x);
        group.bench_with_input(BenchmarkId::new("encode", n), &x, |b, x| {
            b.iter(|| black_box(codec.encode(black_box(x))))
        });
        group.bench_with_input(BenchmarkId::new("decode", n), &text, |b, s| {
            b.iter(|| black_box(codec.decode(black_box(s))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sa_maxcut, bench_sa_mis, bench_random_search, bench_codec);
criterion_main!(benches);
