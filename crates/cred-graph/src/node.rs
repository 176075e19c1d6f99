//! Nodes in the graph.

use crate::address::Address;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A graph node: an address plus an untyped payload.
///
/// The payload is whatever JSON the owning plugin stored. Typed views are
/// the plugin's business, not the graph's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub address: Address,

    #[serde(default)]
    pub payload: Value,
}

impl Node {
    /// Creates a node with the given payload.
    pub fn new(address: Address, payload: Value) -> Self {
        Self { address, payload }
    }

    /// Creates a node with an empty object payload.
    pub fn bare(address: Address) -> Self {
        Self::new(address, Value::Object(Default::default()))
    }

    /// The node's type tag.
    pub fn type_tag(&self) -> &str {
        &self.address.type_tag
    }

    /// Reads a top-level payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
