//! Core graph data structure.
//!
//! `Graph` wraps petgraph and adds address indexes for point lookups and
//! type-filtered enumeration. Nodes and edges are never removed, so the
//! petgraph indices handed out by the indexes stay valid for the lifetime
//! of the graph.

use crate::address::Address;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::node::Node;
use crate::snapshot::GraphSnapshot;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// An address-keyed property graph.
///
/// Serializes through [`GraphSnapshot`]; loading a snapshot rebuilds the
/// indexes and rejects duplicate or dangling elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct Graph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Node, Edge>,

    /// Node address to graph index.
    node_index: HashMap<Address, NodeIndex>,

    /// Edge address to graph index.
    edge_index: HashMap<Address, EdgeIndex>,

    /// Node type tag to node indexes, in insertion order.
    type_index: HashMap<String, Vec<NodeIndex>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
            type_index: HashMap::new(),
        }
    }

    /// Adds a node to the graph.
    ///
    /// Fails if a node with the same address already exists.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.node_index.contains_key(&node.address) {
            return Err(GraphError::DuplicateNode(node.address));
        }

        trace!(address = %node.address, "adding node");

        let address = node.address.clone();
        let type_tag = address.type_tag.clone();
        let index = self.graph.add_node(node);

        self.node_index.insert(address, index);
        self.type_index.entry(type_tag).or_default().push(index);

        Ok(())
    }

    /// Adds an edge to the graph.
    ///
    /// Both endpoints must already be present, and the edge address must
    /// be new to the edge address space.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edge_index.contains_key(&edge.address) {
            return Err(GraphError::DuplicateEdge(edge.address));
        }

        let from = self.endpoint(&edge, &edge.src)?;
        let to = self.endpoint(&edge, &edge.dst)?;

        trace!(address = %edge.address, src = %edge.src, dst = %edge.dst, "adding edge");

        let address = edge.address.clone();
        let index = self.graph.add_edge(from, to, edge);
        self.edge_index.insert(address, index);

        Ok(())
    }

    fn endpoint(&self, edge: &Edge, end: &Address) -> Result<NodeIndex> {
        self.node_index
            .get(end)
            .copied()
            .ok_or_else(|| GraphError::DanglingEdge {
                edge: edge.address.clone(),
                missing: end.clone(),
            })
    }

    /// Looks up a node by address.
    pub fn node(&self, address: &Address) -> Option<&Node> {
        let index = self.node_index.get(address)?;
        self.graph.node_weight(*index)
    }

    /// Looks up an edge by address.
    pub fn edge(&self, address: &Address) -> Option<&Edge> {
        let index = self.edge_index.get(address)?;
        self.graph.edge_weight(*index)
    }

    /// All nodes carrying the given type tag, in insertion order.
    pub fn nodes_of_type(&self, type_tag: &str) -> Vec<&Node> {
        self.type_index
            .get(type_tag)
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|idx| self.graph.node_weight(*idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub(crate) fn node_index_of(&self, address: &Address) -> Option<NodeIndex> {
        self.node_index.get(address).copied()
    }
}

/// Graph statistics, keyed by type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<String, usize>,
    pub edges_by_type: BTreeMap<String, usize>,
}

impl Graph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let mut edges_by_type = BTreeMap::new();
        for edge in self.edges() {
            *edges_by_type.entry(edge.type_tag().to_string()).or_insert(0) += 1;
        }

        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            nodes_by_type: self
                .type_index
                .iter()
                .map(|(tag, indexes)| (tag.clone(), indexes.len()))
                .collect(),
            edges_by_type,
        }
    }
}
