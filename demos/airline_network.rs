//! Airline network walkthrough
//!
//! Builds a small South American network in code and runs every engine on it:
//! routes, hubs, a minimum network, a visit plan and round trips.
//!
//! Run with: `RUST_LOG=debug cargo run --example airline_network`

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use trueno_routes::{
    best_route, betweenness, bfs_hops_path, dijkstra_path, find_tour, pagerank, prim_mst,
    random_walk_centrality, top_n, toposort_checked, weight_by_frequency, CsrGraph, Direction,
    EdgeWeights, Metric, Order, PageRankConfig, TourConfig, WeightKind,
};

/// Latitude, longitude
type Coords = (f64, f64);

fn build_network() -> Result<CsrGraph<Coords>> {
    let mut graph = CsrGraph::undirected();

    for (code, coords) in [
        ("EZE", (-34.82, -58.54)),
        ("AEP", (-34.56, -58.42)),
        ("MVD", (-34.84, -56.03)),
        ("GRU", (-23.43, -46.47)),
        ("SCL", (-33.39, -70.79)),
        ("LIM", (-12.02, -77.11)),
        ("BOG", (4.70, -74.15)),
        ("MIA", (25.80, -80.29)),
    ] {
        graph.add_vertex(code, coords)?;
    }

    // hours, price (USD), weekly flights
    for (from, to, hours, price, flights) in [
        ("EZE", "GRU", 3.0, 150.0, 20.0),
        ("EZE", "SCL", 2.0, 110.0, 30.0),
        ("AEP", "MVD", 1.0, 60.0, 15.0),
        ("AEP", "GRU", 3.2, 140.0, 10.0),
        ("GRU", "LIM", 5.0, 240.0, 7.0),
        ("SCL", "LIM", 3.5, 180.0, 14.0),
        ("LIM", "BOG", 3.0, 160.0, 12.0),
        ("BOG", "MIA", 3.8, 220.0, 10.0),
        ("GRU", "MIA", 8.0, 600.0, 5.0),
        ("MVD", "GRU", 2.8, 200.0, 4.0),
    ] {
        graph.add_edge(from, to, EdgeWeights::new(hours, price, flights))?;
    }

    Ok(graph)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("🛫 trueno-routes: airline network walkthrough\n");

    let graph = build_network()?;
    println!(
        "✓ Built network with {} airports and {} routes\n",
        graph.num_nodes(),
        graph.num_edges()
    );

    // 1. Point-to-point routes
    let eze = graph.node_id("EZE")?;
    let mia = graph.node_id("MIA")?;
    println!("🔍 EZE → MIA");
    for (label, kind) in [("fastest", WeightKind::Time), ("cheapest", WeightKind::Price)] {
        let route = dijkstra_path(&graph, kind, eze, mia)?.context("MIA unreachable")?;
        println!(
            "   {label:<9} {} ({:.1})",
            graph.keys_of(&route.path)?.join(" → "),
            route.cost
        );
    }
    let fewest = bfs_hops_path(&graph, eze, mia)?.context("MIA unreachable")?;
    println!(
        "   {:<9} {} ({} legs)\n",
        "fewest",
        graph.keys_of(&fewest.path)?.join(" → "),
        fewest.cost
    );

    // 2. City to city (any airport of each)
    let buenos_aires = [eze, graph.node_id("AEP")?];
    let montevideo = [graph.node_id("MVD")?];
    let route = best_route(
        &graph,
        &buenos_aires,
        &montevideo,
        Metric::Weight(WeightKind::Price),
    )?
    .context("no route between cities")?;
    println!(
        "🏙  Buenos Aires → Montevideo: {} (${:.0})\n",
        graph.keys_of(&route.path)?.join(" → "),
        route.cost
    );

    // 3. Hubs
    let show_top = |title: &str, scores: Vec<f64>| -> Result<()> {
        let top = top_n(graph.nodes().zip(scores), 3, Order::Descending);
        println!("   {title:<22} {}", graph.keys_of(&top)?.join(", "));
        Ok(())
    };
    println!("⭐ Most central airports:");
    show_top("betweenness", betweenness(&graph)?)?;
    show_top("pagerank", pagerank(&graph, &PageRankConfig::default())?)?;

    let mut rng = StdRng::seed_from_u64(2024);
    let mut walk = random_walk_centrality(&graph, &mut rng)?;
    weight_by_frequency(&graph, &mut walk, WeightKind::Flights)?;
    show_top("random walk × flights", walk)?;
    println!();

    // 4. Minimum network keeping everyone connected
    let tree = prim_mst(&graph, WeightKind::Time)?;
    println!(
        "🌲 Minimum network by time: {} routes, {:.1} hours total",
        tree.num_edges(),
        tree.total_weight(WeightKind::Time)
    );
    for (from, to, weights) in tree.edges() {
        println!(
            "   {} - {} ({:.1}h)",
            tree.key(from)?,
            tree.key(to)?,
            weights.get(WeightKind::Time)
        );
    }
    println!();

    // 5. Visit plan from "A before B" constraints
    let constraints = [("SCL", "LIM"), ("EZE", "SCL"), ("LIM", "BOG"), ("EZE", "GRU")];
    let edges: Vec<_> = constraints
        .iter()
        .map(|&(before, after)| (before, after, EdgeWeights::default()))
        .collect();
    let plan: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &edges)?;
    let order = toposort_checked(&plan)?;
    println!("🗓  Visit plan: {}\n", plan.keys_of(&order)?.join(" → "));

    // 6. Round trips
    println!("🔁 Round trips from EZE:");
    for length in 2..=5 {
        match find_tour(&graph, eze, length, TourConfig::default())? {
            Some(tour) => println!("   {length} stops: {}", graph.keys_of(&tour)?.join(" → ")),
            None => println!("   {length} stops: none"),
        }
    }

    Ok(())
}
