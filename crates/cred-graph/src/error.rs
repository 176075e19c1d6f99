use crate::address::Address;
use thiserror::Error;

/// Structural errors raised while assembling or loading a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate node: {0}")]
    DuplicateNode(Address),

    #[error("Duplicate edge: {0}")]
    DuplicateEdge(Address),

    #[error("Edge {edge} references missing node {missing}")]
    DanglingEdge { edge: Address, missing: Address },
}

pub type Result<T> = std::result::Result<T, GraphError>;
