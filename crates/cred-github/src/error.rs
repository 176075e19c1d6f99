use cred_graph::{Address, GraphError};
use thiserror::Error;

/// Errors raised by the GitHub porcelain.
///
/// Every error is terminal for the call that raised it. Queries are pure,
/// so repeating a failed call against the same graph fails the same way.
#[derive(Error, Debug)]
pub enum PorcelainError {
    #[error("Address {address} is not in namespace {expected}")]
    WrongNamespace {
        address: Address,
        expected: &'static str,
    },

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(Address),

    #[error("No node for address {0}")]
    MissingPayload(Address),

    #[error("Type mismatch at {address}: expected {expected}, got {actual}")]
    TypeMismatch {
        address: Address,
        expected: &'static str,
        actual: String,
    },

    #[error("Invariant violation at {address}: {message}")]
    InvariantViolation { address: Address, message: String },

    #[error("Malformed payload at {address}: {source}")]
    MalformedPayload {
        address: Address,
        source: serde_json::Error,
    },

    #[error("Malformed field `{field}` at {address}: {source}")]
    MalformedField {
        address: Address,
        field: String,
        source: serde_json::Error,
    },

    #[error("Payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, PorcelainError>;
