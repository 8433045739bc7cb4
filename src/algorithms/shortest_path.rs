//! Shortest path algorithms: Dijkstra's algorithm
//!
//! Provides shortest path computation over one component of the edge weights:
//! - `dijkstra`: Single-source shortest paths with non-negative weights
//! - `dijkstra_path`: Shortest path between two specific nodes
//! - `best_route`: Cheapest route between two groups of nodes
//!
//! # Example
//!
//! ```
//! use trueno_routes::{dijkstra, CsrGraph, Direction, EdgeWeights, WeightKind};
//!
//! let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
//!     ("A", "B", EdgeWeights::new(1.0, 10.0, 1.0)),
//!     ("B", "C", EdgeWeights::new(2.0, 10.0, 1.0)),
//!     ("A", "C", EdgeWeights::new(5.0, 10.0, 1.0)),
//! ]).unwrap();
//! let a = graph.node_id("A").unwrap();
//! let c = graph.node_id("C").unwrap();
//!
//! let tree = dijkstra(&graph, WeightKind::Time, a).unwrap();
//! assert_eq!(tree.distance(a), Some(0.0));
//! assert_eq!(tree.distance(c), Some(3.0)); // A→B→C = 3.0, not A→C = 5.0
//! ```

use super::traversal::bfs_hops_path;
use crate::collections::MinQueue;
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId, WeightKind};

/// Distances and predecessors from one source
///
/// `distance` is `None` for vertices the traversal never reached (distance
/// +∞); `predecessor` is `None` for the source and for unreached vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<D> {
    source: NodeId,
    distances: Vec<Option<D>>,
    predecessors: Vec<Option<NodeId>>,
    visit_order: Vec<NodeId>,
}

impl<D: Copy> ShortestPathTree<D> {
    pub(crate) fn new(
        source: NodeId,
        distances: Vec<Option<D>>,
        predecessors: Vec<Option<NodeId>>,
        visit_order: Vec<NodeId>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
            visit_order,
        }
    }

    /// Root of the tree
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to `node`, `None` if unreachable
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<D> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Parent of `node` in the tree
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Whether `node` was reached from the source
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Per-node distances, indexed by `NodeId`
    #[must_use]
    pub fn distances(&self) -> &[Option<D>] {
        &self.distances
    }

    /// Reached nodes in the order their distance became final
    ///
    /// Distances along this order are non-decreasing.
    #[must_use]
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Path from the source to `target`, `None` if unreachable
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.is_reachable(target)
            .then(|| reconstruct_path(&self.predecessors, target))
    }
}

/// A path together with its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct Route<D> {
    /// Sum of edge costs along `path` (hop count for BFS routes)
    pub cost: D,
    /// Nodes from source to destination, both included
    pub path: Vec<NodeId>,
}

/// What a route minimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of edges
    Hops,
    /// Sum of one weight component
    Weight(WeightKind),
}

/// Walk predecessors back from `target`, then reverse
fn reconstruct_path(predecessors: &[Option<NodeId>], target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = predecessors.get(current.index()).copied().flatten() {
        path.push(pred);
        current = pred;
    }
    path.reverse();
    path
}

/// Compute single-source shortest paths using Dijkstra's algorithm
///
/// Finds the shortest path from the source node to all reachable nodes,
/// using the `kind` component of each edge's weights as its length. Weights
/// must be non-negative.
///
/// # Complexity
///
/// O((V + E) log V) using a binary heap
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if `source` is not in the graph.
///
/// # Example
///
/// ```
/// use trueno_routes::{dijkstra, CsrGraph, Direction, EdgeWeights, WeightKind};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::uniform(4.0)),
///     ("A", "C", EdgeWeights::uniform(1.0)),
///     ("C", "B", EdgeWeights::uniform(2.0)),
/// ]).unwrap();
/// let a = graph.node_id("A").unwrap();
/// let b = graph.node_id("B").unwrap();
/// let c = graph.node_id("C").unwrap();
///
/// let tree = dijkstra(&graph, WeightKind::Price, a).unwrap();
/// // Shortest to B: A→C→B = 3.0 (not A→B = 4.0)
/// assert_eq!(tree.distance(b), Some(3.0));
/// assert_eq!(tree.path_to(b), Some(vec![a, c, b]));
/// ```
pub fn dijkstra<P>(
    graph: &CsrGraph<P>,
    kind: WeightKind,
    source: NodeId,
) -> Result<ShortestPathTree<f64>> {
    run_dijkstra(graph, kind, source, None).map(|(tree, _)| tree)
}

/// Find the shortest path between two nodes
///
/// Stops as soon as `target` is popped from the queue.
///
/// # Returns
///
/// * `Some(route)` if a path exists
/// * `None` if target is unreachable from source
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if either node is not in the graph.
///
/// # Example
///
/// ```
/// use trueno_routes::{dijkstra_path, CsrGraph, Direction, EdgeWeights, WeightKind};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Undirected, &[
///     ("A", "B", EdgeWeights::uniform(1.0)),
///     ("B", "C", EdgeWeights::uniform(2.0)),
/// ]).unwrap();
/// let a = graph.node_id("A").unwrap();
/// let c = graph.node_id("C").unwrap();
///
/// let route = dijkstra_path(&graph, WeightKind::Time, c, a).unwrap().unwrap();
/// assert_eq!(route.cost, 3.0);
/// assert_eq!(graph.keys_of(&route.path).unwrap(), vec!["C", "B", "A"]);
/// ```
pub fn dijkstra_path<P>(
    graph: &CsrGraph<P>,
    kind: WeightKind,
    source: NodeId,
    target: NodeId,
) -> Result<Option<Route<f64>>> {
    graph.check_node(target)?;
    let (tree, reached) = run_dijkstra(graph, kind, source, Some(target))?;
    if !reached {
        return Ok(None); // Target unreachable
    }
    Ok(tree
        .distance(target)
        .zip(tree.path_to(target))
        .map(|(cost, path)| Route { cost, path }))
}

/// Dijkstra core; the flag reports whether `target` was popped
fn run_dijkstra<P>(
    graph: &CsrGraph<P>,
    kind: WeightKind,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<(ShortestPathTree<f64>, bool)> {
    let n = graph.num_nodes();
    let source_idx = graph.check_node(source)?;

    let mut distances: Vec<Option<f64>> = vec![None; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut visit_order = Vec::new();
    let mut queue = MinQueue::new();

    // Start with source
    distances[source_idx] = Some(0.0);
    queue.push(source, 0.0);

    while let Some((node, cost)) = queue.pop() {
        // Stale entry: a shorter distance was already finalized
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        visit_order.push(node);

        if target == Some(node) {
            let tree = ShortestPathTree::new(source, distances, predecessors, visit_order);
            return Ok((tree, true));
        }

        let (neighbors, weights) = graph.adjacency(node)?;
        for (&neighbor, edge) in neighbors.iter().zip(weights) {
            let next_cost = cost + edge.get(kind);

            // Update if this path is shorter
            let is_shorter = distances[neighbor.index()].map_or(true, |d| next_cost < d);
            if is_shorter {
                distances[neighbor.index()] = Some(next_cost);
                predecessors[neighbor.index()] = Some(node);
                queue.push(neighbor, next_cost);
            }
        }
    }

    let tree = ShortestPathTree::new(source, distances, predecessors, visit_order);
    Ok((tree, false))
}

/// Cheapest route from any of `origins` to any of `destinations`
///
/// Every origin/destination pair is evaluated; on equal cost the earliest
/// pair (origins outer, destinations inner) wins. Hop routes report their
/// hop count as the cost.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if any listed node is not in the graph.
pub fn best_route<P>(
    graph: &CsrGraph<P>,
    origins: &[NodeId],
    destinations: &[NodeId],
    metric: Metric,
) -> Result<Option<Route<f64>>> {
    let mut best: Option<Route<f64>> = None;

    for &origin in origins {
        for &destination in destinations {
            let route = match metric {
                Metric::Weight(kind) => dijkstra_path(graph, kind, origin, destination)?,
                #[allow(clippy::cast_precision_loss)] // hop counts stay far below 2^52
                Metric::Hops => bfs_hops_path(graph, origin, destination)?.map(|route| Route {
                    cost: route.cost as f64,
                    path: route.path,
                }),
            };

            if let Some(route) = route {
                if best.as_ref().map_or(true, |current| route.cost < current.cost) {
                    best = Some(route);
                }
            }
        }
    }

    Ok(best)
}
