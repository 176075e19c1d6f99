//! Edge types for the graph.
//!
//! Edges are directed. The edge's type is its address's type tag; the
//! graph does not keep a separate kind field.

use crate::address::Address;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A directed edge between two node addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The edge's own address, in the edge address space.
    pub address: Address,

    /// Node the edge starts at.
    pub src: Address,

    /// Node the edge points to.
    pub dst: Address,

    #[serde(default)]
    pub payload: Value,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(address: Address, src: Address, dst: Address, payload: Value) -> Self {
        Self {
            address,
            src,
            dst,
            payload,
        }
    }

    /// Creates an edge with an empty object payload.
    pub fn bare(address: Address, src: Address, dst: Address) -> Self {
        Self::new(address, src, dst, Value::Object(Default::default()))
    }

    /// The edge's type tag.
    pub fn type_tag(&self) -> &str {
        &self.address.type_tag
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }
}

/// Which incident edges a neighborhood query follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Edges whose `dst` is the queried node.
    In,

    /// Edges whose `src` is the queried node.
    Out,

    /// Either.
    #[default]
    Both,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Both => "both",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: &str, id: &str) -> Address {
        Address::new("test", tag, id)
    }

    #[test]
    fn test_loop_detection() {
        let edge = Edge::bare(addr("E", "1"), addr("N", "a"), addr("N", "b"));
        assert!(!edge.is_loop());
        assert_eq!(edge.type_tag(), "E");

        let lo = Edge::bare(addr("E", "2"), addr("N", "a"), addr("N", "a"));
        assert!(lo.is_loop());
    }

    #[test]
    fn test_default_direction_is_both() {
        assert_eq!(Direction::default(), Direction::Both);
        assert_eq!(Direction::Out.to_string(), "out");
    }
}
