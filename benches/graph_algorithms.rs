//! Criterion benchmarks for route algorithms
//!
//! Tracks:
//! - CSR construction from keyed edge lists
//! - Single-source Dijkstra and BFS on sparse networks
//! - Betweenness (V BFS runs) and `PageRank` convergence
//! - Lazy Prim and pruned vs exhaustive tour search

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use trueno_routes::{
    betweenness, bfs_hops, dijkstra, find_tour, pagerank, prim_mst, top_n, CsrGraph, Direction,
    EdgeWeights, NodeId, Order, PageRankConfig, TourConfig, WeightKind,
};

/// Generate an airline-like network: a ring of airports plus random shortcuts
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_network(num_airports: usize, routes_per_airport: usize) -> Vec<(String, String, EdgeWeights)> {
    let code = |i: usize| format!("A{i:05}");
    let mut edges = Vec::new();
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    for airport in 0..num_airports {
        // Ring keeps the network connected
        let next = (airport + 1) % num_airports;
        edges.push((code(airport), code(next), EdgeWeights::new(1.0, 100.0, 7.0)));

        for _ in 0..routes_per_airport {
            rng_state = rng_state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let target = (rng_state % num_airports as u64) as usize;
            let hours = (rng_state >> 16) % 12 + 1;

            if target != airport {
                edges.push((
                    code(airport),
                    code(target),
                    EdgeWeights::new(hours as f64, (hours * 75) as f64, 3.0),
                ));
            }
        }
    }

    edges
}

fn network(num_airports: usize, routes_per_airport: usize) -> CsrGraph {
    let edges = generate_network(num_airports, routes_per_airport);
    CsrGraph::from_edge_list(Direction::Undirected, &edges).unwrap()
}

/// Benchmark: CSR graph construction from edge list
fn bench_csr_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_construction");

    for size in [100, 500, 1000] {
        let edges = generate_network(size, 3);

        group.bench_with_input(BenchmarkId::new("from_edge_list", size), &edges, |b, edges| {
            b.iter(|| {
                let graph: CsrGraph =
                    CsrGraph::from_edge_list(Direction::Undirected, black_box(edges)).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: single-source shortest paths
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for size in [100, 1000, 5000] {
        let graph = network(size, 3);

        group.bench_with_input(BenchmarkId::new("dijkstra_time", size), &graph, |b, graph| {
            b.iter(|| {
                let tree = dijkstra(black_box(graph), WeightKind::Time, NodeId(0)).unwrap();
                black_box(tree);
            });
        });

        group.bench_with_input(BenchmarkId::new("bfs_hops", size), &graph, |b, graph| {
            b.iter(|| {
                let tree = bfs_hops(black_box(graph), NodeId(0)).unwrap();
                black_box(tree);
            });
        });
    }

    group.finish();
}

/// Benchmark: centrality scores
fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("centrality");

    for size in [100, 500] {
        let graph = network(size, 3);

        group.bench_with_input(BenchmarkId::new("betweenness", size), &graph, |b, graph| {
            b.iter(|| {
                let scores = betweenness(black_box(graph)).unwrap();
                black_box(top_n(graph.nodes().zip(scores), 10, Order::Descending));
            });
        });

        group.bench_with_input(BenchmarkId::new("pagerank", size), &graph, |b, graph| {
            b.iter(|| {
                let scores = pagerank(black_box(graph), &PageRankConfig::default()).unwrap();
                black_box(scores);
            });
        });
    }

    group.finish();
}

/// Benchmark: lazy Prim spanning tree
fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim_mst");

    for size in [100, 1000, 5000] {
        let graph = network(size, 3);

        group.bench_with_input(BenchmarkId::new("time", size), &graph, |b, graph| {
            b.iter(|| {
                let tree = prim_mst(black_box(graph), WeightKind::Time).unwrap();
                black_box(tree);
            });
        });
    }

    group.finish();
}

/// Benchmark: tour search with and without hop-distance pruning
fn bench_tours(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_tour");
    let graph = network(200, 2);

    for (label, prune) in [("pruned", true), ("exhaustive", false)] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let tour = find_tour(black_box(&graph), NodeId(0), 6, TourConfig { prune }).unwrap();
                black_box(tour);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_csr_construction,
    bench_shortest_paths,
    bench_centrality,
    bench_prim,
    bench_tours
);
criterion_main!(benches);
