//! Graph traversal algorithms: hop-count shortest paths
//!
//! Queue-based BFS over the CSR adjacency lists:
//! - `bfs_hops`: hop distances and BFS tree from a source
//! - `bfs_hops_path`: fewest-hops path between two nodes
//! - `hops_to`: hop distances from every node *to* a target (reverse BFS)

use super::shortest_path::{Route, ShortestPathTree};
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};
use std::collections::VecDeque;

/// Breadth-First Search from source node
///
/// Hop count of a node is its BFS parent's hop count + 1. Edge weights are
/// ignored. Ties between equally short paths go to whichever parent BFS
/// dequeued first.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if `source` is not in the graph.
///
/// # Example
///
/// ```
/// use trueno_routes::{bfs_hops, CsrGraph, Direction, EdgeWeights};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::uniform(1.0)),
///     ("B", "C", EdgeWeights::uniform(1.0)),
/// ]).unwrap();
/// let a = graph.node_id("A").unwrap();
/// let c = graph.node_id("C").unwrap();
///
/// let tree = bfs_hops(&graph, a).unwrap();
/// assert_eq!(tree.distance(c), Some(2));
/// assert_eq!(tree.visit_order().len(), 3); // All 3 nodes reachable
/// ```
pub fn bfs_hops<P>(graph: &CsrGraph<P>, source: NodeId) -> Result<ShortestPathTree<usize>> {
    let (tree, _) = run_bfs(graph, source, None)?;
    Ok(tree)
}

/// Fewest-hops path between two nodes
///
/// Returns as soon as `target` is discovered as a neighbor: BFS discovers
/// nodes in non-decreasing hop order, so the first discovery is minimal.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if either node is not in the graph.
///
/// # Example
///
/// ```
/// use trueno_routes::{bfs_hops_path, CsrGraph, Direction, EdgeWeights};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::uniform(1.0)),
///     ("B", "C", EdgeWeights::uniform(1.0)),
///     ("A", "C", EdgeWeights::uniform(50.0)),
/// ]).unwrap();
///
/// let a = graph.node_id("A").unwrap();
/// let c = graph.node_id("C").unwrap();
/// let route = bfs_hops_path(&graph, a, c).unwrap().unwrap();
/// assert_eq!(route.cost, 1);
/// assert_eq!(route.path, vec![a, c]);
/// ```
pub fn bfs_hops_path<P>(
    graph: &CsrGraph<P>,
    source: NodeId,
    target: NodeId,
) -> Result<Option<Route<usize>>> {
    graph.check_node(target)?;
    if source == target {
        graph.check_node(source)?;
        return Ok(Some(Route {
            cost: 0,
            path: vec![source],
        }));
    }

    let (tree, reached) = run_bfs(graph, source, Some(target))?;
    if !reached {
        return Ok(None);
    }
    Ok(tree
        .distance(target)
        .zip(tree.path_to(target))
        .map(|(cost, path)| Route { cost, path }))
}

/// Minimum hop count from every node to `target`
///
/// Reverse BFS over incoming arcs from `target`. Entry `i` is `None` when
/// node `i` cannot reach `target`.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if `target` is not in the graph.
pub fn hops_to<P>(graph: &CsrGraph<P>, target: NodeId) -> Result<Vec<Option<usize>>> {
    let target_idx = graph.check_node(target)?;
    let mut hops = vec![None; graph.num_nodes()];
    let mut frontier = VecDeque::new();

    hops[target_idx] = Some(0);
    frontier.push_back((target, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        // Nodes with an arc into `current` are one hop further away
        for &caller in graph.incoming_neighbors(current)? {
            if hops[caller.index()].is_none() {
                hops[caller.index()] = Some(depth + 1);
                frontier.push_back((caller, depth + 1));
            }
        }
    }

    Ok(hops)
}

/// BFS core; the flag reports whether `target` was discovered
fn run_bfs<P>(
    graph: &CsrGraph<P>,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<(ShortestPathTree<usize>, bool)> {
    let n = graph.num_nodes();
    let source_idx = graph.check_node(source)?;

    let mut distances: Vec<Option<usize>> = vec![None; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visit_order = Vec::new();
    let mut queue = VecDeque::new();

    distances[source_idx] = Some(0);
    visit_order.push(source);
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for &neighbor in graph.outgoing_neighbors(current)? {
            if distances[neighbor.index()].is_none() {
                distances[neighbor.index()] = Some(hops + 1);
                predecessors[neighbor.index()] = Some(current);
                visit_order.push(neighbor);
                queue.push_back((neighbor, hops + 1));
            }
            if target == Some(neighbor) {
                let tree = ShortestPathTree::new(source, distances, predecessors, visit_order);
                return Ok((tree, true));
            }
        }
    }

    let tree = ShortestPathTree::new(source, distances, predecessors, visit_order);
    Ok((tree, false))
}
