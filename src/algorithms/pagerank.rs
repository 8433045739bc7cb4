//! `PageRank` by power iteration over reverse CSR
//!
//! Based on Page et al. (1999) "The `PageRank` Citation Ranking: Bringing Order to the Web"
//! Each iteration pulls rank along incoming arcs, so a vertex only ever
//! divides by the out-degree of a vertex that actually points at it.

use super::centrality::zero_out_degree;
use crate::error::Result;
use crate::storage::CsrGraph;
use tracing::{debug, warn};

/// Damping factor for `PageRank` (Google standard)
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Power-iteration settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following an edge rather than teleporting
    pub damping: f64,
    /// Converged once every per-vertex delta is below this
    pub tolerance: f64,
    /// Iteration cap; `None` iterates until convergence
    pub max_iterations: Option<usize>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: 1e-10,
            max_iterations: Some(1000),
        }
    }
}

/// Compute `PageRank` scores for all nodes in the graph
///
/// # Arguments
///
/// * `graph` - CSR graph representation
/// * `config` - damping, tolerance and iteration cap
///
/// # Returns
///
/// Vector of `PageRank` scores indexed by [`crate::NodeId::index`]. Scores sum
/// to 1.0 when every vertex has an outgoing edge.
///
/// # Algorithm
///
/// ```text
/// PR₀(v)   = (1-d)/N
/// PRₖ₊₁(v) = (1-d)/N + d * Σ_{u ∈ in(v)} PRₖ(u) / outdegree(u)
/// ```
///
/// The teleport term is re-added on every iteration. Iteration stops when
/// `max_v |PRₖ₊₁(v) - PRₖ(v)| < tolerance`. Reaching `max_iterations` first
/// logs a warning and returns the latest iterate.
///
/// # Errors
///
/// Returns [`crate::GraphError::ZeroOutDegree`] before iterating if a vertex
/// with incoming edges has no outgoing edge. Fully isolated vertices are
/// allowed and keep the teleport score.
///
/// # Example
///
/// ```
/// use trueno_routes::{pagerank, CsrGraph, Direction, EdgeWeights, PageRankConfig};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::uniform(1.0)),
///     ("B", "C", EdgeWeights::uniform(1.0)),
///     ("C", "A", EdgeWeights::uniform(1.0)), // Cycle
/// ]).unwrap();
///
/// let scores = pagerank(&graph, &PageRankConfig::default()).unwrap();
/// assert_eq!(scores.len(), 3);
/// assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-8); // Sum = 1.0
/// ```
#[allow(clippy::cast_precision_loss)] // Graphs >2^52 nodes unlikely
pub fn pagerank<P>(graph: &CsrGraph<P>, config: &PageRankConfig) -> Result<Vec<f64>> {
    let n = graph.num_nodes();

    if n == 0 {
        return Ok(Vec::new());
    }

    // Precondition: sinks with callers would need a division by zero
    let mut out_degrees = Vec::with_capacity(n);
    for node in graph.nodes() {
        let out = graph.out_degree(node)?;
        if out == 0 && graph.in_degree(node)? > 0 {
            return Err(zero_out_degree(graph, node));
        }
        out_degrees.push(out as f64);
    }

    let damping = config.damping;
    let teleport = (1.0 - damping) / n as f64;

    let mut ranks = vec![teleport; n];
    let mut new_ranks = vec![0.0; n];

    let mut iteration = 0;
    loop {
        if config.max_iterations.is_some_and(|cap| iteration >= cap) {
            warn!(
                iterations = iteration,
                "PageRank hit the iteration cap before converging"
            );
            break;
        }
        iteration += 1;

        for node in graph.nodes() {
            let incoming: f64 = graph
                .incoming_neighbors(node)?
                .iter()
                .map(|caller| ranks[caller.index()] / out_degrees[caller.index()])
                .sum();
            new_ranks[node.index()] = teleport + damping * incoming;
        }

        // Max-norm convergence: every vertex must settle
        let diff = new_ranks
            .iter()
            .zip(&ranks)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0_f64, f64::max);

        // Swap buffers
        std::mem::swap(&mut ranks, &mut new_ranks);

        if diff < config.tolerance {
            debug!(iterations = iteration, diff, "PageRank converged");
            break;
        }
    }

    Ok(ranks)
}
