//! Neighborhood traversal.
//!
//! This is the only traversal primitive the graph offers. Every
//! relationship accessor built on top of the graph is one call to
//! [`Graph::neighborhood`] with a [`NeighborhoodQuery`].

use crate::address::Address;
use crate::edge::{Direction, Edge};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// Filters for a neighborhood query. All supplied filters must match.
///
/// The default query follows every incident edge in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodQuery {
    /// Only edges with this type tag.
    pub edge_type: Option<String>,

    /// Only edges whose far end carries this node type tag.
    pub node_type: Option<String>,

    pub direction: Direction,
}

impl NeighborhoodQuery {
    /// A query with no filters, following both directions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge_type(mut self, type_tag: impl Into<String>) -> Self {
        self.edge_type = Some(type_tag.into());
        self
    }

    pub fn node_type(mut self, type_tag: impl Into<String>) -> Self {
        self.node_type = Some(type_tag.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    fn matches(&self, edge: &Edge, neighbor: &Address) -> bool {
        let edge_ok = self
            .edge_type
            .as_deref()
            .map_or(true, |t| edge.type_tag() == t);
        let node_ok = self
            .node_type
            .as_deref()
            .map_or(true, |t| neighbor.type_tag == t);
        edge_ok && node_ok
    }
}

/// One incident edge and the node at its far end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'g> {
    pub edge: &'g Edge,

    /// For a self-loop this is the queried node itself.
    pub node: &'g Address,
}

impl Graph {
    /// Returns the edges incident to `address` that match `query`.
    ///
    /// Outgoing matches come first, then incoming ones, each in petgraph's
    /// adjacency order (most recently added edge first). A self-loop is
    /// reported once under [`Direction::Both`]. An unknown address has an
    /// empty neighborhood.
    pub fn neighborhood(
        &self,
        address: &Address,
        query: &NeighborhoodQuery,
    ) -> Vec<Neighbor<'_>> {
        let Some(index) = self.node_index_of(address) else {
            return Vec::new();
        };

        let mut result = Vec::new();

        if matches!(query.direction, Direction::Out | Direction::Both) {
            for edge_ref in self
                .graph
                .edges_directed(index, petgraph::Direction::Outgoing)
            {
                let edge = edge_ref.weight();
                if query.matches(edge, &edge.dst) {
                    result.push(Neighbor {
                        edge,
                        node: &edge.dst,
                    });
                }
            }
        }

        if matches!(query.direction, Direction::In | Direction::Both) {
            for edge_ref in self
                .graph
                .edges_directed(index, petgraph::Direction::Incoming)
            {
                let edge = edge_ref.weight();
                if query.direction == Direction::Both && edge.is_loop() {
                    continue;
                }
                if query.matches(edge, &edge.src) {
                    result.push(Neighbor {
                        edge,
                        node: &edge.src,
                    });
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn addr(tag: &str, id: &str) -> Address {
        Address::new("test", tag, id)
    }

    /// issue -AUTHORS-> alice, issue -AUTHORS-> bob,
    /// issue -CONTAINS-> comment, comment -AUTHORS-> alice,
    /// pr -REFERENCES-> issue
    fn sample() -> Graph {
        let mut graph = Graph::new();
        for (tag, id) in [
            ("ISSUE", "1"),
            ("PULL", "2"),
            ("COMMENT", "c"),
            ("AUTHOR", "alice"),
            ("AUTHOR", "bob"),
        ] {
            graph.add_node(Node::bare(addr(tag, id))).unwrap();
        }
        for (tag, id, src, dst) in [
            ("AUTHORS", "1", addr("ISSUE", "1"), addr("AUTHOR", "alice")),
            ("AUTHORS", "2", addr("ISSUE", "1"), addr("AUTHOR", "bob")),
            ("CONTAINS", "3", addr("ISSUE", "1"), addr("COMMENT", "c")),
            ("AUTHORS", "4", addr("COMMENT", "c"), addr("AUTHOR", "alice")),
            ("REFERENCES", "5", addr("PULL", "2"), addr("ISSUE", "1")),
        ] {
            graph.add_edge(Edge::bare(addr(tag, id), src, dst)).unwrap();
        }
        graph
    }

    fn edge_ids(neighbors: &[Neighbor<'_>]) -> Vec<String> {
        neighbors.iter().map(|n| n.edge.address.id.clone()).collect()
    }

    #[test]
    fn test_out_by_edge_type() {
        let graph = sample();
        let query = NeighborhoodQuery::new()
            .edge_type("AUTHORS")
            .direction(Direction::Out);

        let result = graph.neighborhood(&addr("ISSUE", "1"), &query);
        let mut nodes: Vec<&str> = result.iter().map(|n| n.node.id.as_str()).collect();
        nodes.sort();
        assert_eq!(nodes, vec!["alice", "bob"]);
    }

    #[test]
    fn test_in_direction() {
        let graph = sample();
        let query = NeighborhoodQuery::new()
            .edge_type("AUTHORS")
            .direction(Direction::In);

        let result = graph.neighborhood(&addr("AUTHOR", "alice"), &query);
        let mut nodes: Vec<&Address> = result.iter().map(|n| n.node).collect();
        nodes.sort();
        assert_eq!(nodes, vec![&addr("COMMENT", "c"), &addr("ISSUE", "1")]);
    }

    #[test]
    fn test_node_type_filter() {
        let graph = sample();
        let query = NeighborhoodQuery::new().node_type("COMMENT");

        let result = graph.neighborhood(&addr("ISSUE", "1"), &query);
        assert_eq!(edge_ids(&result), vec!["3"]);
    }

    #[test]
    fn test_unfiltered_both() {
        let graph = sample();
        let result = graph.neighborhood(&addr("ISSUE", "1"), &NeighborhoodQuery::new());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_unknown_address_is_empty() {
        let graph = sample();
        let result = graph.neighborhood(&addr("ISSUE", "404"), &NeighborhoodQuery::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_self_loop_counted_once_for_both() {
        let mut graph = Graph::new();
        let a = addr("ISSUE", "1");
        graph.add_node(Node::bare(a.clone())).unwrap();
        graph
            .add_edge(Edge::bare(addr("REFERENCES", "self"), a.clone(), a.clone()))
            .unwrap();

        let both = graph.neighborhood(&a, &NeighborhoodQuery::new());
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].node, &a);

        let out = graph.neighborhood(&a, &NeighborhoodQuery::new().direction(Direction::Out));
        let inc = graph.neighborhood(&a, &NeighborhoodQuery::new().direction(Direction::In));
        assert_eq!(out.len(), 1);
        assert_eq!(inc.len(), 1);
    }

    #[test]
    fn test_order_is_repeatable() {
        let graph = sample();
        let query = NeighborhoodQuery::new();
        let first = edge_ids(&graph.neighborhood(&addr("ISSUE", "1"), &query));
        let second = edge_ids(&graph.neighborhood(&addr("ISSUE", "1"), &query));
        assert_eq!(first, second);
    }

    const TAGS: [&str; 3] = ["A", "B", "C"];

    fn arb_graph() -> impl Strategy<Value = Graph> {
        prop::collection::vec(0usize..3, 1..8)
            .prop_flat_map(|node_tags| {
                let n = node_tags.len();
                let edges = prop::collection::vec((0..n, 0..n, 0usize..2), 0..20);
                (Just(node_tags), edges)
            })
            .prop_map(|(node_tags, edges)| {
                let mut graph = Graph::new();
                for (i, tag) in node_tags.iter().enumerate() {
                    graph
                        .add_node(Node::bare(addr(TAGS[*tag], &i.to_string())))
                        .unwrap();
                }
                for (i, (src, dst, kind)) in edges.into_iter().enumerate() {
                    let src = addr(TAGS[node_tags[src]], &src.to_string());
                    let dst = addr(TAGS[node_tags[dst]], &dst.to_string());
                    let edge_tag = if kind == 0 { "X" } else { "Y" };
                    graph
                        .add_edge(Edge::bare(addr(edge_tag, &i.to_string()), src, dst))
                        .unwrap();
                }
                graph
            })
    }

    proptest! {
        #[test]
        fn prop_filters_never_add_results(
            graph in arb_graph(),
            tag in 0usize..3,
            edge in 0usize..2,
        ) {
            let edge_tag = if edge == 0 { "X" } else { "Y" };
            for node in graph.nodes() {
                for direction in [Direction::In, Direction::Out, Direction::Both] {
                    let count = |query: &NeighborhoodQuery| {
                        graph.neighborhood(&node.address, query).len()
                    };
                    let base = NeighborhoodQuery::new().direction(direction);
                    let all = count(&base);
                    let by_edge = count(&base.clone().edge_type(edge_tag));
                    let by_node = count(&base.clone().node_type(TAGS[tag]));
                    let by_both = count(&base.clone().edge_type(edge_tag).node_type(TAGS[tag]));
                    prop_assert!(by_edge <= all);
                    prop_assert!(by_node <= all);
                    prop_assert!(by_both <= by_edge);
                    prop_assert!(by_both <= by_node);
                }
            }
        }

        #[test]
        fn prop_both_is_union_of_in_and_out(graph in arb_graph(), edge in 0usize..2) {
            let edge_tag = if edge == 0 { "X" } else { "Y" };
            for node in graph.nodes() {
                let ids = |direction: Direction| -> Vec<Address> {
                    let query = NeighborhoodQuery::new().edge_type(edge_tag).direction(direction);
                    graph
                        .neighborhood(&node.address, &query)
                        .iter()
                        .map(|n| n.edge.address.clone())
                        .collect()
                };

                let both = ids(Direction::Both);
                let union: BTreeSet<Address> = ids(Direction::In)
                    .into_iter()
                    .chain(ids(Direction::Out))
                    .collect();
                let both_set: BTreeSet<Address> = both.iter().cloned().collect();

                prop_assert_eq!(both.len(), both_set.len());
                prop_assert_eq!(both_set, union);
            }
        }
    }
}
