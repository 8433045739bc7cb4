//! Error types for graph queries and algorithms

use thiserror::Error;

/// Error type for graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A key or node id does not name a vertex of the graph
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// A vertex with this key was already added
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    /// Weight lookup for an ordered pair that is not adjacent
    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound {
        /// Key of the source vertex
        from: String,
        /// Key of the target vertex
        to: String,
    },

    /// A per-edge computation reached a vertex with no outgoing edges
    #[error("Vertex {0} has no outgoing edges")]
    ZeroOutDegree(String),

    /// Checked topological sort found a back edge
    #[error("Cycle detected: cannot compute topological order")]
    CycleDetected,

    /// A score vector does not have one entry per vertex
    #[error("Score vector has {actual} entries, graph has {expected} vertices")]
    ScoreLengthMismatch {
        /// Number of vertices in the graph
        expected: usize,
        /// Length of the score vector passed in
        actual: usize,
    },

    /// Node ids are `u32`; the graph cannot grow past that
    #[error("Graph capacity exceeded: {0} vertices")]
    CapacityExceeded(usize),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
