//! Address-to-entity resolution.
//!
//! [`resolve_entity`] is the single place where a type tag becomes a Rust
//! type. Everything downstream works with [`Entity`] or one of the
//! concrete variants and narrows with [`GitHubEntity::from_entity`].

use crate::error::{PorcelainError, Result};
use crate::payload::NodePayload;
use crate::types::{EdgeType, NodeType, GITHUB_NAMESPACE};
use crate::variants::{Author, Comment, Issue, PullRequest, Repository, Review, ReviewComment};
use cred_graph::{Address, Direction, Graph, Neighbor, NeighborhoodQuery, Node};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Behavior shared by every GitHub entity variant.
///
/// An implementor is a view over `(graph, address)`. Nothing is read from
/// the graph until a method asks for it.
pub trait GitHubEntity<'g>: Sized {
    /// The node type this variant stands for.
    const NODE_TYPE: NodeType;

    /// Typed schema of the node payload.
    type Payload: DeserializeOwned;

    fn graph(&self) -> &'g Graph;

    fn address(&self) -> &Address;

    /// Narrows an [`Entity`] to this variant.
    ///
    /// Fails with [`PorcelainError::TypeMismatch`] when the entity is any
    /// other variant.
    fn from_entity(entity: Entity<'g>) -> Result<Self>;

    fn type_tag(&self) -> &str {
        &self.address().type_tag
    }

    /// The backing node, or `MissingPayload` if the address has none.
    fn node(&self) -> Result<&'g Node> {
        self.graph()
            .node(self.address())
            .ok_or_else(|| PorcelainError::MissingPayload(self.address().clone()))
    }

    /// Decodes the whole payload.
    fn payload(&self) -> Result<Self::Payload> {
        let node = self.node()?;
        <Self::Payload as Deserialize>::deserialize(&node.payload).map_err(|source| {
            PorcelainError::MalformedPayload {
                address: self.address().clone(),
                source,
            }
        })
    }

    /// Decodes one top-level payload field. An absent field decodes as
    /// JSON `null`.
    fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let node = self.node()?;
        let value = node.get(key).unwrap_or(&Value::Null);
        T::deserialize(value).map_err(|source| PorcelainError::MalformedField {
            address: self.address().clone(),
            field: key.to_string(),
            source,
        })
    }

    fn url(&self) -> Result<String> {
        self.field("url")
    }
}

/// A resolved GitHub entity of any variant.
#[derive(Debug, Clone)]
pub enum Entity<'g> {
    Repository(Repository<'g>),
    Issue(Issue<'g>),
    PullRequest(PullRequest<'g>),
    Comment(Comment<'g>),
    Author(Author<'g>),
    Review(Review<'g>),
    ReviewComment(ReviewComment<'g>),
}

macro_rules! each_variant {
    ($entity:expr, $inner:ident => $body:expr) => {
        match $entity {
            Entity::Repository($inner) => $body,
            Entity::Issue($inner) => $body,
            Entity::PullRequest($inner) => $body,
            Entity::Comment($inner) => $body,
            Entity::Author($inner) => $body,
            Entity::Review($inner) => $body,
            Entity::ReviewComment($inner) => $body,
        }
    };
}

impl<'g> Entity<'g> {
    pub fn address(&self) -> &Address {
        each_variant!(self, e => e.address())
    }

    pub fn type_tag(&self) -> &str {
        &self.address().type_tag
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Entity::Repository(_) => NodeType::Repository,
            Entity::Issue(_) => NodeType::Issue,
            Entity::PullRequest(_) => NodeType::PullRequest,
            Entity::Comment(_) => NodeType::Comment,
            Entity::Author(_) => NodeType::Author,
            Entity::Review(_) => NodeType::Review,
            Entity::ReviewComment(_) => NodeType::ReviewComment,
        }
    }

    pub fn url(&self) -> Result<String> {
        each_variant!(self, e => e.url())
    }

    /// Decodes the payload into the variant's typed schema.
    pub fn payload(&self) -> Result<NodePayload> {
        match self {
            Entity::Repository(e) => e.payload().map(NodePayload::Repository),
            Entity::Issue(e) => e.payload().map(NodePayload::Issue),
            Entity::PullRequest(e) => e.payload().map(NodePayload::PullRequest),
            Entity::Comment(e) => e.payload().map(NodePayload::Comment),
            Entity::Author(e) => e.payload().map(NodePayload::Author),
            Entity::Review(e) => e.payload().map(NodePayload::Review),
            Entity::ReviewComment(e) => e.payload().map(NodePayload::ReviewComment),
        }
    }

    /// Error for a failed narrowing from this entity to `expected`.
    pub(crate) fn mismatch(&self, expected: NodeType) -> PorcelainError {
        PorcelainError::TypeMismatch {
            address: self.address().clone(),
            expected: expected.as_tag(),
            actual: self.type_tag().to_string(),
        }
    }
}

/// Resolves a GitHub address to its entity variant.
///
/// Only the namespace and type tag are checked. The node itself is not
/// read, so an address without a node resolves fine and fails with
/// `MissingPayload` on first field access.
pub fn resolve_entity<'g>(graph: &'g Graph, address: &Address) -> Result<Entity<'g>> {
    if !address.in_namespace(GITHUB_NAMESPACE) {
        return Err(PorcelainError::WrongNamespace {
            address: address.clone(),
            expected: GITHUB_NAMESPACE,
        });
    }

    let node_type = NodeType::from_tag(&address.type_tag)
        .ok_or_else(|| PorcelainError::UnknownEntityType(address.clone()))?;

    let address = address.clone();
    let entity = match node_type {
        NodeType::Repository => Entity::Repository(Repository::new(graph, address)),
        NodeType::Issue => Entity::Issue(Issue::new(graph, address)),
        NodeType::PullRequest => Entity::PullRequest(PullRequest::new(graph, address)),
        NodeType::Comment => Entity::Comment(Comment::new(graph, address)),
        NodeType::Author => Entity::Author(Author::new(graph, address)),
        NodeType::Review => Entity::Review(Review::new(graph, address)),
        NodeType::ReviewComment => Entity::ReviewComment(ReviewComment::new(graph, address)),
    };

    Ok(entity)
}

/// Resolves an address straight to a concrete variant.
pub(crate) fn resolve_as<'g, V: GitHubEntity<'g>>(
    graph: &'g Graph,
    address: &Address,
) -> Result<V> {
    V::from_entity(resolve_entity(graph, address)?)
}

/// Resolves every neighbor, in neighborhood order.
pub(crate) fn resolve_neighbors<'g>(
    graph: &'g Graph,
    neighbors: Vec<Neighbor<'g>>,
) -> Result<Vec<Entity<'g>>> {
    neighbors
        .into_iter()
        .map(|n| resolve_entity(graph, n.node))
        .collect()
}

/// One neighborhood query for neighbors of variant `V`, resolved as `V`.
pub(crate) fn related<'g, V: GitHubEntity<'g>>(
    graph: &'g Graph,
    address: &Address,
    edge_type: EdgeType,
    direction: Direction,
) -> Result<Vec<V>> {
    let query = NeighborhoodQuery::new()
        .edge_type(edge_type.as_tag())
        .node_type(V::NODE_TYPE.as_tag())
        .direction(direction);

    graph
        .neighborhood(address, &query)
        .into_iter()
        .map(|n| resolve_as(graph, n.node))
        .collect()
}

/// Enforces that a relationship has at most one match.
pub(crate) fn at_most_one<'g>(
    address: &Address,
    relation: &str,
    mut neighbors: Vec<Neighbor<'g>>,
) -> Result<Option<Neighbor<'g>>> {
    match neighbors.len() {
        0 | 1 => Ok(neighbors.pop()),
        n => Err(PorcelainError::InvariantViolation {
            address: address.clone(),
            message: format!("multiple {} edges ({})", relation, n),
        }),
    }
}
