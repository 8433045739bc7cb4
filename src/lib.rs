//! trueno-routes: route and network analysis over weighted CSR graphs
//!
//! # Overview
//!
//! trueno-routes stores a keyed graph (airports, stations, hosts) in CSR form
//! with a three-component weight on every edge, and answers the questions a
//! route planner asks of it: cheapest and fewest-hop paths, most central
//! vertices, a minimum spanning network, a dependency order, and closed
//! tours of a given length.
//!
//! # Quick Start
//!
//! ```
//! use trueno_routes::{dijkstra_path, top_n, betweenness, CsrGraph, EdgeWeights, Order, WeightKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Flights: hours, price, weekly frequency
//! let mut graph: CsrGraph = CsrGraph::undirected();
//! for airport in ["EZE", "GRU", "SCL", "LIM"] {
//!     graph.add_vertex(airport, ())?;
//! }
//! graph.add_edge("EZE", "GRU", EdgeWeights::new(3.0, 150.0, 20.0))?;
//! graph.add_edge("GRU", "LIM", EdgeWeights::new(5.0, 240.0, 7.0))?;
//! graph.add_edge("EZE", "SCL", EdgeWeights::new(2.0, 110.0, 30.0))?;
//! graph.add_edge("SCL", "LIM", EdgeWeights::new(3.5, 180.0, 14.0))?;
//!
//! // Fastest connection
//! let (eze, lim) = (graph.node_id("EZE")?, graph.node_id("LIM")?);
//! let route = dijkstra_path(&graph, WeightKind::Time, eze, lim)?.ok_or("unreachable")?;
//! assert_eq!(graph.keys_of(&route.path)?, vec!["EZE", "SCL", "LIM"]);
//! assert_eq!(route.cost, 5.5);
//!
//! // Busiest hubs
//! let scores = betweenness(&graph)?;
//! let hubs = top_n(graph.nodes().zip(scores), 2, Order::Descending);
//! assert_eq!(hubs.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR (Compressed Sparse Row) adjacency with a reverse index
//!   for O(1) incoming-arc queries; string keys interned to dense [`NodeId`]s
//! - **Algorithms**: free functions over `&CsrGraph`, each returning fresh
//!   owned results (trees, routes, score vectors, orderings)
//! - **Logging**: `tracing` events at `debug`/`trace`; install any subscriber
//!   to see them

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod collections;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    best_route, betweenness, bfs_hops, bfs_hops_path, dijkstra, dijkstra_path, find_tour,
    hops_to, is_cyclic, merge_sort, merge_sort_by, pagerank, prim_mst, prim_mst_from,
    random_walk_centrality, top_n, toposort, toposort_checked, weight_by_frequency, Metric,
    Order, PageRankConfig, Route, ShortestPathTree, TourConfig, DEFAULT_DAMPING,
};
pub use collections::MinQueue;
pub use storage::{CsrGraph, Direction, EdgeWeights, NodeId, WeightKind, WEIGHT_ARITY};

// Error type
pub use error::{GraphError, Result};
