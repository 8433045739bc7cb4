//! Topological algorithms: cycle detection and topological sort
//!
//! Provides graph ordering algorithms needed for dependency analysis:
//! - `toposort`: reversed DFS postorder, assumes a DAG
//! - `toposort_checked`: same order, fails on a back edge
//! - `is_cyclic`: Detect if a directed graph contains cycles
//!
//! Direction is taken literally: an undirected edge is a pair of opposite
//! arcs and therefore a 2-cycle.
//!
//! # Example
//!
//! ```
//! use trueno_routes::{is_cyclic, toposort, CsrGraph, Direction, EdgeWeights};
//!
//! // Build a DAG: A → B → C
//! let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
//!     ("A", "B", EdgeWeights::default()),
//!     ("B", "C", EdgeWeights::default()),
//! ]).unwrap();
//!
//! assert!(!is_cyclic(&graph));
//!
//! let order = toposort(&graph).unwrap();
//! assert_eq!(graph.keys_of(&order).unwrap(), vec!["A", "B", "C"]);
//! ```

use crate::error::{GraphError, Result};
use crate::storage::{CsrGraph, NodeId};

/// Node state during DFS traversal
#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// Not yet visited
    Unvisited,
    /// Currently in DFS stack (part of current path)
    InStack,
    /// Fully processed (all descendants visited)
    Finished,
}

/// Check if the graph contains any cycles
///
/// Uses depth-first search with three-color marking:
/// - Unvisited: not yet seen
/// - `InStack`: currently being explored (back edge = cycle)
/// - Finished: fully explored
///
/// # Example
///
/// ```
/// use trueno_routes::{is_cyclic, CsrGraph, Direction, EdgeWeights};
///
/// // Cyclic: A → B → C → A
/// let cyclic: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::default()),
///     ("B", "C", EdgeWeights::default()),
///     ("C", "A", EdgeWeights::default()),
/// ]).unwrap();
/// assert!(is_cyclic(&cyclic));
/// ```
#[must_use]
pub fn is_cyclic<P>(graph: &CsrGraph<P>) -> bool {
    matches!(
        dfs_postorder(graph, true),
        Err(GraphError::CycleDetected)
    )
}

/// Compute topological ordering of a directed acyclic graph (DAG)
///
/// Returns nodes in an order where for every edge u → v, u appears before v:
/// DFS postorder from every unvisited vertex in vertex order, reversed.
///
/// The input is assumed acyclic and this is not checked: a cyclic graph
/// still yields a permutation of its vertices, just not a valid ordering.
/// Use [`toposort_checked`] to reject cycles.
///
/// # Errors
///
/// Propagates graph lookup errors (none occur for a well-formed graph).
///
/// # Example
///
/// ```
/// use trueno_routes::{toposort, CsrGraph, Direction, EdgeWeights};
///
/// // DAG: A → B → C, A → C
/// let graph: CsrGraph = CsrGraph::from_edge_list(Direction::Directed, &[
///     ("A", "B", EdgeWeights::default()),
///     ("B", "C", EdgeWeights::default()),
///     ("A", "C", EdgeWeights::default()),
/// ]).unwrap();
///
/// let order = toposort(&graph).unwrap();
/// let pos = |key| order.iter().position(|&n| n == graph.node_id(key).unwrap()).unwrap();
///
/// assert!(pos("A") < pos("B"));
/// assert!(pos("B") < pos("C"));
/// ```
pub fn toposort<P>(graph: &CsrGraph<P>) -> Result<Vec<NodeId>> {
    dfs_postorder(graph, false).map(reversed)
}

/// Topological ordering that rejects cycles
///
/// Same order as [`toposort`] on a DAG.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] if the graph contains a cycle.
pub fn toposort_checked<P>(graph: &CsrGraph<P>) -> Result<Vec<NodeId>> {
    dfs_postorder(graph, true).map(reversed)
}

fn reversed(mut order: Vec<NodeId>) -> Vec<NodeId> {
    order.reverse();
    order
}

/// Iterative DFS postorder over all components
///
/// Each stack frame holds a node and the index of its next neighbor to try,
/// which reproduces the recursive visiting order without recursion depth
/// limits.
fn dfs_postorder<P>(graph: &CsrGraph<P>, check_cycles: bool) -> Result<Vec<NodeId>> {
    let n = graph.num_nodes();
    let mut state = vec![NodeState::Unvisited; n];
    let mut postorder = Vec::with_capacity(n);
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    // Visit all nodes (handles disconnected components)
    for start in graph.nodes() {
        if state[start.index()] != NodeState::Unvisited {
            continue;
        }
        state[start.index()] = NodeState::InStack;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let neighbors = graph.outgoing_neighbors(node)?;

            let Some(&next) = neighbors.get(frame.1) else {
                state[node.index()] = NodeState::Finished;
                postorder.push(node);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match state[next.index()] {
                NodeState::InStack if check_cycles => {
                    // Back edge found - cycle detected!
                    return Err(GraphError::CycleDetected);
                }
                NodeState::Unvisited => {
                    state[next.index()] = NodeState::InStack;
                    stack.push((next, 0));
                }
                NodeState::InStack | NodeState::Finished => {}
            }
        }
    }

    Ok(postorder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Direction, EdgeWeights};

    fn dag(edges: &[(&str, &str)]) -> CsrGraph {
        let weighted: Vec<_> = edges
            .iter()
            .map(|&(u, v)| (u, v, EdgeWeights::default()))
            .collect();
        CsrGraph::from_edge_list(Direction::Directed, &weighted).unwrap()
    }

    fn position(graph: &CsrGraph, order: &[NodeId], key: &str) -> usize {
        let node = graph.node_id(key).unwrap();
        order.iter().position(|&x| x == node).unwrap()
    }

    #[test]
    fn test_empty_graph_not_cyclic() {
        let graph: CsrGraph = CsrGraph::directed();
        assert!(!is_cyclic(&graph));
        assert!(toposort(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let graph = dag(&[("A", "A")]); // Self-loop
        assert!(is_cyclic(&graph));
    }

    #[test]
    fn test_simple_cycle() {
        let graph = dag(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(is_cyclic(&graph));
    }

    #[test]
    fn test_diamond_dag_not_cyclic() {
        // Diamond: A → B → D, A → C → D
        let graph = dag(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn test_undirected_edge_is_cyclic() {
        let graph: CsrGraph = CsrGraph::from_edge_list(
            Direction::Undirected,
            &[("A", "B", EdgeWeights::default())],
        )
        .unwrap();
        assert!(is_cyclic(&graph));
    }

    #[test]
    fn test_toposort_simple_chain() {
        let graph = dag(&[("A", "B"), ("B", "C")]);
        let order = toposort(&graph).unwrap();
        assert_eq!(graph.keys_of(&order).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_toposort_diamond() {
        let graph = dag(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let order = toposort(&graph).unwrap();

        let pos = |key| position(&graph, &order, key);
        assert!(pos("A") < pos("B"), "A must come before B");
        assert!(pos("A") < pos("C"), "A must come before C");
        assert!(pos("B") < pos("D"), "B must come before D");
        assert!(pos("C") < pos("D"), "C must come before D");
    }

    #[test]
    fn test_toposort_matches_recursive_postorder() {
        // Recursive DFS from A: A → B → D, back to A → C. Postorder D B C A,
        // then isolated E. Reversed: E A C B D
        let mut graph = dag(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        graph.add_vertex("E", ()).unwrap();

        let order = toposort(&graph).unwrap();
        assert_eq!(graph.keys_of(&order).unwrap(), vec!["E", "A", "C", "B", "D"]);
    }

    #[test]
    fn test_toposort_unchecked_on_cycle() {
        let graph = dag(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let order = toposort(&graph).unwrap();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_toposort_checked_fails_on_cycle() {
        let graph = dag(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let result = toposort_checked(&graph);
        assert_eq!(result, Err(GraphError::CycleDetected));
        assert!(result.unwrap_err().to_string().contains("Cycle"));
    }

    #[test]
    fn test_toposort_checked_agrees_on_dag() {
        let graph = dag(&[("A", "B"), ("A", "C"), ("C", "B")]);
        assert_eq!(toposort_checked(&graph), toposort(&graph));
    }

    #[test]
    fn test_disconnected_components() {
        // Two disconnected chains: A → B, C → D
        let graph = dag(&[("A", "B"), ("C", "D")]);
        assert!(!is_cyclic(&graph));

        let order = toposort(&graph).unwrap();
        assert_eq!(order.len(), 4);

        let pos = |key| position(&graph, &order, key);
        assert!(pos("A") < pos("B"));
        assert!(pos("C") < pos("D"));
    }

    #[test]
    fn test_complex_dag() {
        // Complex DAG with multiple paths
        //     R
        //    /|\
        //   A B C
        //    \|/
        //     S
        let graph = dag(&[
            ("R", "A"),
            ("R", "B"),
            ("R", "C"),
            ("A", "S"),
            ("B", "S"),
            ("C", "S"),
        ]);
        assert!(!is_cyclic(&graph));

        let order = toposort(&graph).unwrap();

        // R must be first, S must be last
        assert_eq!(order[0], graph.node_id("R").unwrap());
        assert_eq!(order[4], graph.node_id("S").unwrap());
    }

    #[test]
    fn test_cycle_in_subgraph() {
        // A → B → C → B (cycle), D → E
        let graph = dag(&[("A", "B"), ("B", "C"), ("C", "B"), ("D", "E")]);
        assert!(is_cyclic(&graph));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let keys: Vec<String> = (0..50_000).map(|i| format!("T{i}")).collect();
        let edges: Vec<_> = keys.windows(2).map(|w| (w[0].as_str(), w[1].as_str())).collect();
        let graph = dag(&edges);

        let order = toposort_checked(&graph).unwrap();
        assert_eq!(order.first(), graph.node_id("T0").ok().as_ref());
        assert_eq!(order.last(), graph.node_id("T49999").ok().as_ref());
    }
}
