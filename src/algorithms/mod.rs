//! Graph algorithms (Dijkstra, BFS, centrality, `PageRank`, Prim, topological, tours)
//!
//! Every algorithm is a free function over a borrowed [`crate::CsrGraph`];
//! none of them mutates its input.

pub mod centrality;
pub mod mst;
pub mod order;
pub mod pagerank;
pub mod shortest_path;
pub mod topo;
pub mod tour;
pub mod traversal;

pub use centrality::{betweenness, random_walk_centrality, weight_by_frequency};
pub use mst::{prim_mst, prim_mst_from};
pub use order::{merge_sort, merge_sort_by, top_n, Order};
pub use pagerank::{pagerank, PageRankConfig, DEFAULT_DAMPING};
pub use shortest_path::{best_route, dijkstra, dijkstra_path, Metric, Route, ShortestPathTree};
pub use topo::{is_cyclic, toposort, toposort_checked};
pub use tour::{find_tour, TourConfig};
pub use traversal::{bfs_hops, bfs_hops_path, hops_to};
