//! Minimum spanning tree via lazy Prim
//!
//! Candidate crossing edges sit in a [`MinQueue`] keyed by one weight
//! component; entries whose far end was already absorbed are dropped when
//! they surface instead of being decreased in place.

use crate::collections::MinQueue;
use crate::error::Result;
use crate::storage::{CsrGraph, EdgeWeights, NodeId, WeightKind};
use tracing::debug;

/// Minimum spanning tree grown from an arbitrary vertex
///
/// Starts from [`CsrGraph::any_node`]. See [`prim_mst_from`].
///
/// # Errors
///
/// Propagates graph lookup errors (none occur for a well-formed graph).
///
/// # Example
///
/// ```
/// use trueno_routes::{prim_mst, CsrGraph, Direction, EdgeWeights, WeightKind};
///
/// // Triangle: the 10-hour leg is never needed
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Undirected, &[
///     ("A", "B", EdgeWeights::new(1.0, 0.0, 0.0)),
///     ("B", "C", EdgeWeights::new(2.0, 0.0, 0.0)),
///     ("A", "C", EdgeWeights::new(10.0, 0.0, 0.0)),
/// ]).unwrap();
///
/// let tree = prim_mst(&graph, WeightKind::Time).unwrap();
/// assert_eq!(tree.num_nodes(), 3);
/// assert_eq!(tree.num_edges(), 2);
/// assert_eq!(tree.total_weight(WeightKind::Time), 3.0);
/// ```
pub fn prim_mst<P: Clone>(graph: &CsrGraph<P>, kind: WeightKind) -> Result<CsrGraph<P>> {
    match graph.any_node() {
        Some(start) => prim_mst_from(graph, kind, start),
        None => Ok(graph.without_edges()),
    }
}

/// Minimum spanning tree grown from `start`
///
/// The result keeps every vertex and payload of `graph` and its direction,
/// and holds only the chosen edges with their full weight tuples. Vertices
/// not reachable from `start` stay isolated, so the edge count is the size of
/// `start`'s component minus one.
///
/// On a directed graph only outgoing arcs are followed, which yields a
/// spanning arborescence candidate rather than a true minimum arborescence.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if `start` is not in the graph.
pub fn prim_mst_from<P: Clone>(
    graph: &CsrGraph<P>,
    kind: WeightKind,
    start: NodeId,
) -> Result<CsrGraph<P>> {
    let start_idx = graph.check_node(start)?;
    let mut tree = graph.without_edges();
    let mut visited = vec![false; graph.num_nodes()];
    let mut queue: MinQueue<(NodeId, NodeId, EdgeWeights)> = MinQueue::new();

    visited[start_idx] = true;
    push_crossing_edges(graph, kind, start, &visited, &mut queue)?;

    while let Some(((from, to, weights), _)) = queue.pop() {
        if visited[to.index()] {
            continue; // stale candidate
        }
        visited[to.index()] = true;
        tree.connect(from, to, weights)?;
        push_crossing_edges(graph, kind, to, &visited, &mut queue)?;
    }

    debug!(
        nodes = tree.num_nodes(),
        edges = tree.num_edges(),
        ?kind,
        "spanning tree built"
    );
    Ok(tree)
}

fn push_crossing_edges<P>(
    graph: &CsrGraph<P>,
    kind: WeightKind,
    node: NodeId,
    visited: &[bool],
    queue: &mut MinQueue<(NodeId, NodeId, EdgeWeights)>,
) -> Result<()> {
    let (neighbors, weights) = graph.adjacency(node)?;
    for (&neighbor, w) in neighbors.iter().zip(weights) {
        if !visited[neighbor.index()] {
            queue.push((node, neighbor, *w), w.get(kind));
        }
    }
    Ok(())
}
