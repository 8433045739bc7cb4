//! Vertex centrality: betweenness, random-walk sampling, frequency weighting
//!
//! All scores are dense `Vec<f64>` indexed by [`NodeId::index`].
//!
//! # Betweenness on BFS trees
//!
//! For every source `s` the hop-count BFS tree is walked leaves-first and
//! each vertex hands `1 + acc[w]` to its tree parent:
//!
//! ```text
//! acc_s(parent(w)) += 1 + acc_s(w)        for w ≠ s, farthest first
//! C(v) = Σ_s acc_s(v)                     for v ≠ s
//! ```
//!
//! Only one shortest path per pair is counted (the one through the parent
//! BFS found first), so this is not Brandes' multiplicity-weighted score.

use super::traversal::bfs_hops;
use crate::error::{GraphError, Result};
use crate::storage::{CsrGraph, NodeId, WeightKind};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Betweenness centrality over BFS shortest-path trees
///
/// Connectivity is not required; unreachable pairs contribute 0.
///
/// # Complexity
///
/// O(V · (V + E))
///
/// # Errors
///
/// Propagates graph lookup errors (none occur for a well-formed graph).
///
/// # Example
///
/// ```
/// use trueno_routes::{betweenness, CsrGraph, Direction, EdgeWeights};
///
/// // Path: A - B - C
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Undirected, &[
///     ("A", "B", EdgeWeights::uniform(1.0)),
///     ("B", "C", EdgeWeights::uniform(1.0)),
/// ]).unwrap();
///
/// let scores = betweenness(&graph).unwrap();
/// // B is on the only path between A and C, in both directions
/// assert_eq!(scores, vec![0.0, 2.0, 0.0]);
/// ```
pub fn betweenness<P>(graph: &CsrGraph<P>) -> Result<Vec<f64>> {
    let n = graph.num_nodes();
    let mut centrality = vec![0.0; n];
    let mut dependency = vec![0.0; n];

    for source in graph.nodes() {
        let tree = bfs_hops(graph, source)?;
        dependency.fill(0.0);

        // BFS visit order has non-decreasing hops; reversed, every vertex is
        // processed before its parent
        for &w in tree.visit_order().iter().rev() {
            if w == source {
                continue;
            }
            if let Some(parent) = tree.predecessor(w) {
                dependency[parent.index()] += 1.0 + dependency[w.index()];
            }
        }

        for node in graph.nodes().filter(|&node| node != source) {
            centrality[node.index()] += dependency[node.index()];
        }

        trace!(%source, reached = tree.visit_order().len(), "betweenness source done");
    }

    debug!(nodes = n, "betweenness computed");
    Ok(centrality)
}

/// One-step random-walk centrality
///
/// Every vertex picks one outgoing neighbor uniformly at random and gives it
/// one point. This is a single-hop proxy, not a multi-step walk with restart.
/// Pass a seeded RNG for reproducible scores.
///
/// # Errors
///
/// Returns [`GraphError::ZeroOutDegree`] for the first vertex (in vertex
/// order) that has no outgoing edge.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use trueno_routes::{random_walk_centrality, CsrGraph, Direction, EdgeWeights};
///
/// // Star: every leaf's only neighbor is the hub
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Undirected, &[
///     ("HUB", "A", EdgeWeights::uniform(1.0)),
///     ("HUB", "B", EdgeWeights::uniform(1.0)),
///     ("HUB", "C", EdgeWeights::uniform(1.0)),
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scores = random_walk_centrality(&graph, &mut rng).unwrap();
/// assert_eq!(scores[0], 3.0);
/// assert_eq!(scores.iter().sum::<f64>(), 4.0);
/// ```
pub fn random_walk_centrality<P, R>(graph: &CsrGraph<P>, rng: &mut R) -> Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    let mut scores = vec![0.0; graph.num_nodes()];

    for node in graph.nodes() {
        let neighbors = graph.outgoing_neighbors(node)?;
        let chosen = neighbors
            .choose(rng)
            .ok_or_else(|| zero_out_degree(graph, node))?;
        scores[chosen.index()] += 1.0;
    }

    Ok(scores)
}

/// Scale each score by the vertex's outgoing traffic
///
/// Multiplies `scores[v]` in place by the sum of the `kind` component over
/// v's outgoing edges (e.g. total flights leaving an airport). Vertices with
/// no outgoing edges end at 0. Applies to the output of any centrality.
///
/// # Errors
///
/// Returns [`GraphError::ScoreLengthMismatch`] unless `scores` has exactly one
/// entry per vertex; `scores` is left untouched in that case.
pub fn weight_by_frequency<P>(
    graph: &CsrGraph<P>,
    scores: &mut [f64],
    kind: WeightKind,
) -> Result<()> {
    if scores.len() != graph.num_nodes() {
        return Err(GraphError::ScoreLengthMismatch {
            expected: graph.num_nodes(),
            actual: scores.len(),
        });
    }

    for (node, score) in graph.nodes().zip(scores.iter_mut()) {
        let (_, weights) = graph.adjacency(node)?;
        let frequency: f64 = weights.iter().map(|w| w.get(kind)).sum();
        *score *= frequency;
    }
    Ok(())
}

pub(crate) fn zero_out_degree<P>(graph: &CsrGraph<P>, node: NodeId) -> GraphError {
    let key = graph.key(node).map_or_else(|_| node.to_string(), str::to_string);
    GraphError::ZeroOutDegree(key)
}
