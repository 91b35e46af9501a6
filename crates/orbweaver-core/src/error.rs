//! Error types for graph construction.

use thiserror::Error;

/// Errors raised while building or validating a [`Graph`](crate::graph::Graph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a node id outside `0..node_count`.
    #[error("invalid edge ({a}, {b}): node ids must be in 0..{node_count}")]
    InvalidEdge {
        a: usize,
        b: usize,
        node_count: usize,
    },
}
