//! Structured addresses for nodes and edges.
//!
//! An address is the only identity a graph element has. Two addresses are
//! the same element iff all three parts are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A globally unique key: plugin namespace, type tag, and an opaque id.
///
/// Nodes and edges live in separate address spaces, so the same value may
/// name one node and one edge without conflict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    /// Owning plugin, e.g. `credgraph/github`.
    pub namespace: String,

    /// Entity or relationship type within the plugin, e.g. `ISSUE`.
    pub type_tag: String,

    /// Plugin-defined identifier. Never parsed by the graph.
    pub id: String,
}

impl Address {
    /// Creates a new address.
    pub fn new(
        namespace: impl Into<String>,
        type_tag: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_tag: type_tag.into(),
            id: id.into(),
        }
    }

    /// Returns true if this address belongs to the given plugin.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace == namespace
    }
}

/// Diagnostic form: `namespace:TYPE:"id"`.
///
/// The id is quoted so that ids containing `:` stay unambiguous. This is
/// not a parse format.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{:?}", self.namespace, self.type_tag, self.id)
    }
}
