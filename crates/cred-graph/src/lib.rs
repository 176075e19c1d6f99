//! Credgraph Graph - address-keyed property graph
//!
//! This crate stores plugin-namespaced nodes and edges and answers the
//! queries the plugin porcelains are built from: point lookup by address,
//! enumeration by node type, and filtered neighborhood traversal.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional indexes for:
//! - Node address lookups
//! - Edge address lookups
//! - Type-based enumeration
//!
//! The graph never interprets payloads; they are plain JSON owned by the
//! plugin that wrote them.
//!
//! # Example
//!
//! ```
//! use cred_graph::{Address, Direction, Edge, Graph, NeighborhoodQuery, Node};
//!
//! let issue = Address::new("credgraph/github", "ISSUE", "acme/widgets#1");
//! let author = Address::new("credgraph/github", "AUTHOR", "octocat");
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::bare(issue.clone())).unwrap();
//! graph.add_node(Node::bare(author.clone())).unwrap();
//! graph
//!     .add_edge(Edge::bare(
//!         Address::new("credgraph/github", "AUTHORS", "octocat>acme/widgets#1"),
//!         issue.clone(),
//!         author.clone(),
//!     ))
//!     .unwrap();
//!
//! let query = NeighborhoodQuery::new()
//!     .edge_type("AUTHORS")
//!     .direction(Direction::Out);
//! let authors = graph.neighborhood(&issue, &query);
//! assert_eq!(authors[0].node, &author);
//! ```

mod address;
mod edge;
mod error;
mod graph;
mod neighborhood;
mod node;
mod snapshot;

pub use address::Address;
pub use edge::{Direction, Edge};
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphStats};
pub use neighborhood::{Neighbor, NeighborhoodQuery};
pub use node::Node;
pub use snapshot::GraphSnapshot;
