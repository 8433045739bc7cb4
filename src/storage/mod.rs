//! Graph storage layer
//!
//! Provides the CSR route graph and the weight tuples carried by its edges.

pub mod csr;
pub mod weights;

pub use csr::{CsrGraph, Direction, NodeId};
pub use weights::{EdgeWeights, WeightKind, WEIGHT_ARITY};
