//! Serializable snapshot of a graph.
//!
//! A snapshot is the flat node and edge lists in insertion order. Loading
//! replays the inserts, so adjacency order and every structural check in
//! [`Graph::add_node`] / [`Graph::add_edge`] carry over unchanged.

use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        let (nodes, edges) = graph.graph.into_nodes_edges();
        Self {
            nodes: nodes.into_iter().map(|n| n.weight).collect(),
            edges: edges.into_iter().map(|e| e.weight).collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        debug!(
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "loading graph snapshot"
        );

        let mut graph = Graph::new();
        for node in snapshot.nodes {
            graph.add_node(node)?;
        }
        for edge in snapshot.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}
