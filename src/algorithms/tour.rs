//! Bounded tour search: closed walks of a fixed length that repeat no stop
//!
//! Depth-first backtracking over an explicit [`TourState`]. The origin opens
//! the walk without being marked visited, so the walk may pass back through
//! it once before closing. With pruning on,
//! a reverse BFS from the origin ([`hops_to`]) gives a lower bound on the arcs
//! still needed to get home, and any candidate that cannot make it back in
//! the remaining steps is skipped. The bound is admissible, so pruning never
//! changes which tour is found, only how fast.

use super::traversal::hops_to;
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};
use tracing::debug;

/// Tour search options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourConfig {
    /// Skip candidates whose hop distance back to the origin exceeds the
    /// steps left
    pub prune: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self { prune: true }
    }
}

/// Walk under construction plus per-depth neighbor cursors
///
/// `cursors[i]` is the index of the next outgoing neighbor of `walk[i]` to
/// try. Advancing and backtracking keep the three fields in lockstep.
struct TourState {
    walk: Vec<NodeId>,
    visited: Vec<bool>,
    cursors: Vec<usize>,
}

impl TourState {
    /// Walk holding only the origin, which stays unmarked
    fn new(num_nodes: usize, origin: NodeId, length: usize) -> Self {
        let mut walk = Vec::with_capacity(length + 1);
        walk.push(origin);
        let mut cursors = Vec::with_capacity(length);
        cursors.push(0);
        Self {
            walk,
            visited: vec![false; num_nodes],
            cursors,
        }
    }

    fn last(&self) -> Option<NodeId> {
        self.walk.last().copied()
    }

    fn advance(&mut self, node: NodeId) {
        self.walk.push(node);
        self.visited[node.index()] = true;
        self.cursors.push(0);
    }

    /// Undo the latest step; false once only the origin is left
    fn backtrack(&mut self) -> bool {
        if self.walk.len() <= 1 {
            return false;
        }
        if let Some(node) = self.walk.pop() {
            self.visited[node.index()] = false;
            self.cursors.pop();
        }
        true
    }

    /// Next unvisited neighbor of the walk's tip that can still get home
    fn next_candidate<P>(
        &mut self,
        graph: &CsrGraph<P>,
        hops_home: Option<&[Option<usize>]>,
        length: usize,
    ) -> Result<Option<NodeId>> {
        let (Some(tip), Some(cursor)) = (self.last(), self.cursors.last_mut()) else {
            return Ok(None);
        };
        // Arcs left after stepping to the candidate, closing arc included
        let budget = length - self.walk.len();
        let neighbors = graph.outgoing_neighbors(tip)?;

        while let Some(&candidate) = neighbors.get(*cursor) {
            *cursor += 1;
            if self.visited[candidate.index()] {
                continue;
            }
            // hops[origin] is 0, so the origin itself always passes
            if let Some(hops) = hops_home {
                if hops[candidate.index()].map_or(true, |h| h > budget) {
                    continue;
                }
            }
            return Ok(Some(candidate));
        }
        Ok(None)
    }

    fn closed(mut self, origin: NodeId) -> Vec<NodeId> {
        self.walk.push(origin);
        self.walk
    }
}

/// Find a closed tour of `length` stops starting and ending at `origin`
///
/// The tour is returned as `length + 1` ids: `origin`, `length - 1` pairwise
/// distinct interior stops, and `origin` again. The origin is not marked
/// visited when the search starts, so it may be one of the interior stops:
/// on a star centred at A, the tour of length 4 is `[A, B, A, C, A]`.
/// Candidates are tried in adjacency order, and the first feasible tour in
/// that enumeration is returned.
///
/// Returns `Ok(None)` when no tour exists, including `length == 0` and
/// `length > graph.num_nodes() + 1`. A `length` of 1 needs a self-loop.
///
/// Worst case is exponential in `length`.
///
/// # Errors
///
/// Returns [`crate::GraphError::VertexNotFound`] if `origin` is not in the graph.
///
/// # Example
///
/// ```
/// use trueno_routes::{find_tour, CsrGraph, Direction, EdgeWeights, TourConfig};
///
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::default()),
///     ("B", "C", EdgeWeights::default()),
///     ("C", "A", EdgeWeights::default()),
/// ]).unwrap();
/// let a = graph.node_id("A").unwrap();
///
/// let tour = find_tour(&graph, a, 3, TourConfig::default()).unwrap().unwrap();
/// assert_eq!(graph.keys_of(&tour).unwrap(), vec!["A", "B", "C", "A"]);
///
/// assert_eq!(find_tour(&graph, a, 2, TourConfig::default()).unwrap(), None);
/// ```
pub fn find_tour<P>(
    graph: &CsrGraph<P>,
    origin: NodeId,
    length: usize,
    config: TourConfig,
) -> Result<Option<Vec<NodeId>>> {
    graph.check_node(origin)?;
    if length == 0 || length > graph.num_nodes() + 1 {
        return Ok(None);
    }

    let hops_home = if config.prune {
        Some(hops_to(graph, origin)?)
    } else {
        None
    };

    let mut state = TourState::new(graph.num_nodes(), origin, length);
    let mut expansions: u64 = 0;

    loop {
        if state.walk.len() == length {
            if state.last().is_some_and(|tip| graph.has_edge(tip, origin)) {
                debug!(%origin, length, expansions, "tour found");
                return Ok(Some(state.closed(origin)));
            }
            if !state.backtrack() {
                break;
            }
            continue;
        }

        match state.next_candidate(graph, hops_home.as_deref(), length)? {
            Some(next) => {
                expansions += 1;
                state.advance(next);
            }
            None => {
                if !state.backtrack() {
                    break;
                }
            }
        }
    }

    debug!(%origin, length, expansions, "no tour");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Direction, EdgeWeights};
    use crate::GraphError;

    const UNPRUNED: TourConfig = TourConfig { prune: false };

    fn graph_of(direction: Direction, edges: &[(&str, &str)]) -> CsrGraph {
        let weighted: Vec<_> = edges
            .iter()
            .map(|&(u, v)| (u, v, EdgeWeights::default()))
            .collect();
        CsrGraph::from_edge_list(direction, &weighted).unwrap()
    }

    fn tour_keys(graph: &CsrGraph, origin: &str, length: usize, config: TourConfig) -> Option<Vec<String>> {
        let origin = graph.node_id(origin).unwrap();
        find_tour(graph, origin, length, config)
            .unwrap()
            .map(|tour| {
                graph
                    .keys_of(&tour)
                    .unwrap()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
    }

    #[test]
    fn test_tour_three_cycle() {
        let graph = graph_of(Direction::Directed, &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(
            tour_keys(&graph, "A", 3, TourConfig::default()),
            Some(vec!["A".into(), "B".into(), "C".into(), "A".into()])
        );
        assert_eq!(tour_keys(&graph, "B", 3, UNPRUNED).unwrap()[0], "B");
    }

    #[test]
    fn test_tour_backtracks_out_of_dead_end() {
        // From A, B is tried first but B → E never returns
        let graph = graph_of(
            Direction::Directed,
            &[("A", "B"), ("A", "C"), ("B", "E"), ("C", "D"), ("D", "A")],
        );
        for config in [TourConfig::default(), UNPRUNED] {
            assert_eq!(
                tour_keys(&graph, "A", 3, config),
                Some(vec!["A".into(), "C".into(), "D".into(), "A".into()])
            );
        }
        assert_eq!(tour_keys(&graph, "A", 4, TourConfig::default()), None);
    }

    #[test]
    fn test_tour_interior_stops_are_distinct() {
        // Square with a diagonal, undirected
        let graph = graph_of(
            Direction::Undirected,
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")],
        );
        for length in 2..=5 {
            let tour = tour_keys(&graph, "A", length, TourConfig::default()).unwrap();
            assert_eq!(tour.len(), length + 1);
            assert_eq!(tour.first(), tour.last());
            let mut interior = tour[1..length].to_vec();
            interior.sort();
            interior.dedup();
            assert_eq!(interior.len(), length - 1, "length {length}");
        }
    }

    #[test]
    fn test_tour_passes_back_through_origin() {
        // Star centred at A: every tour longer than 2 must revisit A
        let star = graph_of(Direction::Undirected, &[("A", "B"), ("A", "C"), ("A", "D")]);
        assert_eq!(
            tour_keys(&star, "A", 2, TourConfig::default()),
            Some(vec!["A".into(), "B".into(), "A".into()])
        );
        for config in [TourConfig::default(), UNPRUNED] {
            assert_eq!(
                tour_keys(&star, "A", 4, config),
                Some(vec!["A".into(), "B".into(), "A".into(), "C".into(), "A".into()])
            );
        }
        // Only one return to A fits before closing
        assert_eq!(tour_keys(&star, "A", 3, TourConfig::default()), None);
        assert_eq!(tour_keys(&star, "A", 5, TourConfig::default()), None);
    }

    #[test]
    fn test_tour_length_bounds() {
        let graph = graph_of(Direction::Directed, &[("A", "B"), ("B", "A")]);
        assert_eq!(tour_keys(&graph, "A", 0, TourConfig::default()), None);
        assert_eq!(tour_keys(&graph, "A", 3, TourConfig::default()), None);
        assert_eq!(
            tour_keys(&graph, "A", 2, TourConfig::default()),
            Some(vec!["A".into(), "B".into(), "A".into()])
        );

        // With the origin revisited, a tour can have one more stop than |V|
        let square = graph_of(
            Direction::Undirected,
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")],
        );
        assert_eq!(
            tour_keys(&square, "A", 5, TourConfig::default()),
            Some(vec!["A".into(), "B".into(), "A".into(), "D".into(), "C".into(), "A".into()])
        );
        assert_eq!(tour_keys(&square, "A", 6, TourConfig::default()), None);
    }

    #[test]
    fn test_tour_of_one_needs_self_loop() {
        let looped = graph_of(Direction::Directed, &[("A", "A")]);
        assert_eq!(
            tour_keys(&looped, "A", 1, TourConfig::default()),
            Some(vec!["A".into(), "A".into()])
        );

        let plain = graph_of(Direction::Directed, &[("A", "B")]);
        assert_eq!(tour_keys(&plain, "A", 1, TourConfig::default()), None);
    }

    #[test]
    fn test_tour_pruning_agrees_with_exhaustive_search() {
        let graph = graph_of(
            Direction::Directed,
            &[
                ("A", "B"),
                ("A", "E"),
                ("B", "C"),
                ("B", "F"),
                ("C", "D"),
                ("D", "A"),
                ("E", "B"),
                ("F", "C"),
                ("F", "E"),
            ],
        );
        for length in 1..=7 {
            assert_eq!(
                tour_keys(&graph, "A", length, TourConfig::default()),
                tour_keys(&graph, "A", length, UNPRUNED),
                "length {length}"
            );
        }
    }

    #[test]
    fn test_tour_unknown_origin() {
        let graph = graph_of(Direction::Directed, &[("A", "B")]);
        assert!(matches!(
            find_tour(&graph, NodeId(5), 2, TourConfig::default()),
            Err(GraphError::VertexNotFound(_))
        ));
    }
}
