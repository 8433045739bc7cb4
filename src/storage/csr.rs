//! CSR (Compressed Sparse Row) route graph
//!
//! Vertices are addressed by string keys (airport codes, city names) that are
//! interned into dense [`NodeId`]s in insertion order. Edges live in a forward
//! CSR (outgoing arcs + weight tuples) mirrored by a reverse CSR (incoming
//! arcs), so both neighbor directions are slice lookups.
//!
//! # CSR Format
//!
//! ```text
//! Directed graph: A → B, A → C, B → C
//!
//! CSR:
//!   row_offsets: [0, 2, 3, 3]  // A: arcs [0..2), B: [2..3), C: [3..3)
//!   col_indices: [B, C, C]
//!   edge_weights: [w(A,B), w(A,C), w(B,C)]
//! ```
//!
//! An undirected edge is stored as two arcs, one per endpoint, so adjacency
//! queries are symmetric.

use super::weights::{EdgeWeights, WeightKind};
use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// Node identifier (zero-indexed, dense, in vertex insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of this node in per-vertex vectors (distances, scores, ...)
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Graph-wide edge orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `add_edge(u, v)` stores the single arc u → v
    Directed,
    /// `add_edge(u, v)` stores u → v and v → u
    Undirected,
}

/// CSR route graph with keyed vertices and weight-tuple edges
///
/// Optimized for:
/// - O(1) access to outgoing arcs (forward CSR)
/// - O(1) access to incoming arcs (reverse CSR)
/// - Deterministic neighbor order (arc insertion order)
///
/// # Example
///
/// ```
/// use trueno_routes::{CsrGraph, EdgeWeights};
///
/// let mut graph: CsrGraph = CsrGraph::undirected();
/// let eze = graph.add_vertex("EZE", ()).unwrap();
/// let gru = graph.add_vertex("GRU", ()).unwrap();
/// graph.add_edge("EZE", "GRU", EdgeWeights::new(160.0, 300.0, 12.0)).unwrap();
///
/// assert_eq!(graph.outgoing_neighbors(eze).unwrap(), &[gru]);
/// assert_eq!(graph.outgoing_neighbors(gru).unwrap(), &[eze]);
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph<P = ()> {
    direction: Direction,

    /// Forward CSR: node i's arcs are `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    row_offsets: Vec<usize>,

    /// Forward CSR: arc targets
    col_indices: Vec<NodeId>,

    /// Forward CSR: weight tuple per arc
    edge_weights: Vec<EdgeWeights>,

    /// Reverse CSR: row offsets for incoming arcs
    rev_row_offsets: Vec<usize>,

    /// Reverse CSR: arc sources
    rev_col_indices: Vec<NodeId>,

    /// Vertex keys, indexed by `NodeId`
    keys: Vec<String>,

    /// Vertex payloads, indexed by `NodeId`
    payloads: Vec<P>,

    key_index: HashMap<String, NodeId>,

    /// Logical edges (an undirected edge counts once)
    num_edges: usize,
}

impl<P> CsrGraph<P> {
    /// Create new empty graph
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            row_offsets: vec![0],
            col_indices: Vec::new(),
            edge_weights: Vec::new(),
            rev_row_offsets: vec![0],
            rev_col_indices: Vec::new(),
            keys: Vec::new(),
            payloads: Vec::new(),
            key_index: HashMap::new(),
            num_edges: 0,
        }
    }

    /// Create new empty directed graph
    #[must_use]
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Create new empty undirected graph
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Create graph from edge list
    ///
    /// Vertices are created with a default payload the first time a key is
    /// mentioned, so node ids follow first-mention order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if the list names more than
    /// `u32::MAX` distinct keys.
    pub fn from_edge_list<K: AsRef<str>>(
        direction: Direction,
        edges: &[(K, K, EdgeWeights)],
    ) -> Result<Self>
    where
        P: Default,
    {
        let mut graph = Self::new(direction);
        for (from, to, weights) in edges {
            let src = graph.vertex_or_insert(from.as_ref())?;
            let dst = graph.vertex_or_insert(to.as_ref())?;
            graph.connect(src, dst, *weights)?;
        }
        Ok(graph)
    }

    /// Copy of this graph's vertices and payloads with no edges
    #[must_use]
    pub fn without_edges(&self) -> Self
    where
        P: Clone,
    {
        let n = self.num_nodes();
        Self {
            direction: self.direction,
            row_offsets: vec![0; n + 1],
            col_indices: Vec::new(),
            edge_weights: Vec::new(),
            rev_row_offsets: vec![0; n + 1],
            rev_col_indices: Vec::new(),
            keys: self.keys.clone(),
            payloads: self.payloads.clone(),
            key_index: self.key_index.clone(),
            num_edges: 0,
        }
    }

    /// Add a vertex with its payload
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the key is already present,
    /// or [`GraphError::CapacityExceeded`] past `u32::MAX` vertices.
    pub fn add_vertex(&mut self, key: impl Into<String>, payload: P) -> Result<NodeId> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(GraphError::DuplicateVertex(key));
        }

        let raw = u32::try_from(self.keys.len())
            .map_err(|_| GraphError::CapacityExceeded(self.keys.len()))?;
        let node = NodeId(raw);

        // New row starts (and ends) where the last one ended: no arcs yet
        let last_offset = *self.row_offsets.last().unwrap_or(&0);
        self.row_offsets.push(last_offset);
        let rev_last_offset = *self.rev_row_offsets.last().unwrap_or(&0);
        self.rev_row_offsets.push(rev_last_offset);

        self.key_index.insert(key.clone(), node);
        self.keys.push(key);
        self.payloads.push(payload);

        Ok(node)
    }

    /// Add an edge between two keyed vertices
    ///
    /// Re-adding an existing edge overwrites its weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either key is unknown.
    pub fn add_edge(&mut self, from: &str, to: &str, weights: EdgeWeights) -> Result<()> {
        let src = self.node_id(from)?;
        let dst = self.node_id(to)?;
        self.connect(src, dst, weights)
    }

    /// Add an edge between two node ids
    ///
    /// Re-adding an existing edge overwrites its weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either id is out of bounds.
    pub fn connect(&mut self, from: NodeId, to: NodeId, weights: EdgeWeights) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let mut fresh = self.upsert_arc(from, to, weights);
        if self.direction == Direction::Undirected && from != to {
            fresh |= self.upsert_arc(to, from, weights);
        }
        if fresh {
            self.num_edges += 1;
        }
        Ok(())
    }

    /// Look up a vertex by key
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the key is unknown.
    pub fn node_id(&self, key: &str) -> Result<NodeId> {
        self.key_index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(key.to_string()))
    }

    /// Whether a vertex with this key exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.key_index.contains_key(key)
    }

    /// Key of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn key(&self, node: NodeId) -> Result<&str> {
        let idx = self.check_node(node)?;
        Ok(&self.keys[idx])
    }

    /// Keys along a path of node ids
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] on the first unknown id.
    pub fn keys_of(&self, path: &[NodeId]) -> Result<Vec<&str>> {
        path.iter().map(|&node| self.key(node)).collect()
    }

    /// Payload of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn payload(&self, node: NodeId) -> Result<&P> {
        let idx = self.check_node(node)?;
        Ok(&self.payloads[idx])
    }

    /// All vertices, in insertion order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        #[allow(clippy::cast_possible_truncation)] // add_vertex caps the count at u32::MAX
        let n = self.keys.len() as u32;
        (0..n).map(NodeId)
    }

    /// One arbitrary vertex (the first inserted), `None` for an empty graph
    #[must_use]
    pub fn any_node(&self) -> Option<NodeId> {
        self.nodes().next()
    }

    /// Get outgoing neighbors of a node, in arc insertion order
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        let idx = self.check_node(node)?;
        Ok(&self.col_indices[self.row_range(idx)])
    }

    /// Get outgoing neighbors together with the weights of the arcs leading to them
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn adjacency(&self, node: NodeId) -> Result<(&[NodeId], &[EdgeWeights])> {
        let idx = self.check_node(node)?;
        let range = self.row_range(idx);
        Ok((&self.col_indices[range.clone()], &self.edge_weights[range]))
    }

    /// Get incoming neighbors of a node
    ///
    /// Returns O(1) access to incoming arcs via reverse CSR. For undirected
    /// graphs this holds the same vertices as [`Self::outgoing_neighbors`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn incoming_neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        let idx = self.check_node(node)?;
        let start = self.rev_row_offsets[idx];
        let end = self.rev_row_offsets[idx + 1];
        Ok(&self.rev_col_indices[start..end])
    }

    /// Number of outgoing arcs
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        self.outgoing_neighbors(node).map(<[NodeId]>::len)
    }

    /// Number of incoming arcs
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the id is out of bounds.
    pub fn in_degree(&self, node: NodeId) -> Result<usize> {
        self.incoming_neighbors(node).map(<[NodeId]>::len)
    }

    /// Weight tuple of the arc `from → to`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] for unknown ids and
    /// [`GraphError::EdgeNotFound`] if the pair is not adjacent.
    pub fn edge_weights(&self, from: NodeId, to: NodeId) -> Result<&EdgeWeights> {
        self.check_node(to)?;
        let src = self.check_node(from)?;
        self.arc_position(src, to)
            .map(|pos| &self.edge_weights[pos])
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: self.keys[src].clone(),
                to: self.keys[to.index()].clone(),
            })
    }

    /// Whether the arc `from → to` exists (false for unknown ids)
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        from.index() < self.num_nodes() && self.arc_position(from.index(), to).is_some()
    }

    /// Every logical edge once, as `(from, to, weights)`
    ///
    /// Undirected edges are reported from their lower-indexed endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &EdgeWeights)> + '_ {
        let directed = self.is_directed();
        self.nodes().flat_map(move |src| {
            let range = self.row_range(src.index());
            self.col_indices[range.clone()]
                .iter()
                .zip(&self.edge_weights[range])
                .filter(move |(dst, _)| directed || src <= **dst)
                .map(move |(&dst, weights)| (src, dst, weights))
        })
    }

    /// Sum of one weight component over all logical edges
    #[must_use]
    pub fn total_weight(&self, kind: WeightKind) -> f64 {
        self.edges().map(|(_, _, weights)| weights.get(kind)).sum()
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.keys.len()
    }

    /// Get number of logical edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Edge orientation of this graph
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether edges are one-way arcs
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    /// Validate a node id, returning its index
    pub(crate) fn check_node(&self, node: NodeId) -> Result<usize> {
        let idx = node.index();
        if idx >= self.keys.len() {
            return Err(GraphError::VertexNotFound(node.to_string()));
        }
        Ok(idx)
    }

    fn vertex_or_insert(&mut self, key: &str) -> Result<NodeId>
    where
        P: Default,
    {
        match self.key_index.get(key) {
            Some(&node) => Ok(node),
            None => self.add_vertex(key, P::default()),
        }
    }

    fn row_range(&self, idx: usize) -> Range<usize> {
        self.row_offsets[idx]..self.row_offsets[idx + 1]
    }

    fn arc_position(&self, src_idx: usize, dst: NodeId) -> Option<usize> {
        let range = self.row_range(src_idx);
        let start = range.start;
        self.col_indices[range]
            .iter()
            .position(|&target| target == dst)
            .map(|offset| start + offset)
    }

    /// Insert arc `src → dst`, or overwrite its weights. Returns true if inserted.
    fn upsert_arc(&mut self, src: NodeId, dst: NodeId, weights: EdgeWeights) -> bool {
        let src_idx = src.index();
        if let Some(pos) = self.arc_position(src_idx, dst) {
            self.edge_weights[pos] = weights;
            return false;
        }

        // Forward arc goes at the end of src's row
        let end = self.row_offsets[src_idx + 1];
        self.col_indices.insert(end, dst);
        self.edge_weights.insert(end, weights);
        for offset in &mut self.row_offsets[src_idx + 1..] {
            *offset += 1;
        }

        // Reverse arc goes at the end of dst's row
        let dst_idx = dst.index();
        let rev_end = self.rev_row_offsets[dst_idx + 1];
        self.rev_col_indices.insert(rev_end, src);
        for offset in &mut self.rev_row_offsets[dst_idx + 1..] {
            *offset += 1;
        }

        true
    }
}

impl<P> Default for CsrGraph<P> {
    fn default() -> Self {
        Self::undirected()
    }
}
