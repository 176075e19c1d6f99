//! Concrete entity variants.
//!
//! Each variant is a `(graph, address)` pair. Shared behavior comes from
//! [`GitHubEntity`] and the capability traits in [`crate::capability`];
//! what is left here is per-variant fields and relationships.

use crate::capability::{Commentable, Post};
use crate::entity::{
    at_most_one, related, resolve_as, resolve_entity, resolve_neighbors, Entity, GitHubEntity,
};
use crate::error::{PorcelainError, Result};
use crate::payload::{
    AuthorPayload, AuthorSubtype, CommentPayload, IssuePayload, MergedAsPayload,
    PullRequestPayload, RepositoryPayload, ReviewCommentPayload, ReviewPayload, ReviewState,
};
use crate::types::{EdgeType, NodeType, COMMIT_TYPE, GITHUB_NAMESPACE};
use cred_graph::{Address, Direction, Graph, NeighborhoodQuery};
use serde::Deserialize;

macro_rules! entity_variant {
    ($(#[$meta:meta])* $name:ident, $payload:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<'g> {
            graph: &'g Graph,
            address: Address,
        }

        impl<'g> $name<'g> {
            pub(crate) fn new(graph: &'g Graph, address: Address) -> Self {
                Self { graph, address }
            }
        }

        impl<'g> GitHubEntity<'g> for $name<'g> {
            const NODE_TYPE: NodeType = NodeType::$name;
            type Payload = $payload;

            fn graph(&self) -> &'g Graph {
                self.graph
            }

            fn address(&self) -> &Address {
                &self.address
            }

            fn from_entity(entity: Entity<'g>) -> Result<Self> {
                match entity {
                    Entity::$name(inner) => Ok(inner),
                    other => Err(other.mismatch(NodeType::$name)),
                }
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("address", &self.address)
                    .finish()
            }
        }

        impl<'g> From<$name<'g>> for Entity<'g> {
            fn from(inner: $name<'g>) -> Self {
                Entity::$name(inner)
            }
        }

        impl<'g> TryFrom<Entity<'g>> for $name<'g> {
            type Error = PorcelainError;

            fn try_from(entity: Entity<'g>) -> Result<Self> {
                Self::from_entity(entity)
            }
        }
    };
}

entity_variant!(
    /// A GitHub repository.
    Repository,
    RepositoryPayload
);

entity_variant!(
    /// A GitHub issue.
    Issue,
    IssuePayload
);

entity_variant!(
    /// A GitHub pull request.
    PullRequest,
    PullRequestPayload
);

entity_variant!(
    /// A top-level comment on an issue or pull request.
    Comment,
    CommentPayload
);

entity_variant!(
    /// A user, bot, or organization that authored posts.
    Author,
    AuthorPayload
);

entity_variant!(
    /// A pull request review.
    Review,
    ReviewPayload
);

entity_variant!(
    /// An inline comment belonging to a review.
    ReviewComment,
    ReviewCommentPayload
);

impl<'g> Repository<'g> {
    pub fn owner(&self) -> Result<String> {
        self.field("owner")
    }

    pub fn name(&self) -> Result<String> {
        self.field("name")
    }

    /// Every issue in the graph.
    ///
    /// This scans the whole graph, not just this repository's subgraph.
    pub fn issues(&self) -> Vec<Issue<'g>> {
        scan(self.graph, NodeType::Issue, Issue::new)
    }

    /// Every pull request in the graph. Graph-wide, like [`Self::issues`].
    pub fn pull_requests(&self) -> Vec<PullRequest<'g>> {
        scan(self.graph, NodeType::PullRequest, PullRequest::new)
    }

    /// Every author in the graph. Graph-wide, like [`Self::issues`].
    pub fn authors(&self) -> Vec<Author<'g>> {
        scan(self.graph, NodeType::Author, Author::new)
    }

    /// Finds the issue or pull request with the given number.
    ///
    /// Issues are scanned first, then pull requests, and the last match
    /// wins: when an issue and a pull request share a number the pull
    /// request is returned. The scan is graph-wide.
    pub fn issue_or_pr_by_number(&self, number: u64) -> Result<Option<Entity<'g>>> {
        let mut result = None;

        for issue in self.issues() {
            if issue.number()? == number {
                result = Some(Entity::Issue(issue));
            }
        }
        for pull in self.pull_requests() {
            if pull.number()? == number {
                result = Some(Entity::PullRequest(pull));
            }
        }

        Ok(result)
    }
}

/// All GitHub nodes of one type, wrapped as `V`.
fn scan<'g, V>(
    graph: &'g Graph,
    node_type: NodeType,
    wrap: fn(&'g Graph, Address) -> V,
) -> Vec<V> {
    graph
        .nodes_of_type(node_type.as_tag())
        .into_iter()
        .filter(|node| node.address.in_namespace(GITHUB_NAMESPACE))
        .map(|node| wrap(graph, node.address.clone()))
        .collect()
}

impl<'g> Issue<'g> {
    pub fn number(&self) -> Result<u64> {
        self.field("number")
    }

    pub fn title(&self) -> Result<String> {
        self.field("title")
    }
}

impl<'g> Post<'g> for Issue<'g> {}
impl<'g> Commentable<'g> for Issue<'g> {}

impl<'g> PullRequest<'g> {
    pub fn number(&self) -> Result<u64> {
        self.field("number")
    }

    pub fn title(&self) -> Result<String> {
        self.field("title")
    }

    pub fn reviews(&self) -> Result<Vec<Review<'g>>> {
        related(self.graph, &self.address, EdgeType::Contains, Direction::Out)
    }

    /// Hash of the commit this pull request was merged as.
    ///
    /// `None` for an unmerged pull request. A pull request has at most one
    /// merge edge; finding more is an `InvariantViolation`.
    pub fn merge_commit_hash(&self) -> Result<Option<String>> {
        let query = NeighborhoodQuery::new()
            .edge_type(EdgeType::MergedAs.as_tag())
            .node_type(COMMIT_TYPE)
            .direction(Direction::Out);
        let merges = self.graph.neighborhood(&self.address, &query);

        let Some(merge) = at_most_one(&self.address, EdgeType::MergedAs.as_tag(), merges)? else {
            return Ok(None);
        };

        let payload = MergedAsPayload::deserialize(&merge.edge.payload).map_err(|source| {
            PorcelainError::MalformedPayload {
                address: merge.edge.address.clone(),
                source,
            }
        })?;

        Ok(Some(payload.hash))
    }
}

impl<'g> Post<'g> for PullRequest<'g> {}
impl<'g> Commentable<'g> for PullRequest<'g> {}

impl<'g> Comment<'g> {
    /// The issue or pull request holding this comment, if any.
    pub fn parent(&self) -> Result<Option<Entity<'g>>> {
        let query = NeighborhoodQuery::new()
            .edge_type(EdgeType::Contains.as_tag())
            .direction(Direction::In);
        let containers = self.graph.neighborhood(&self.address, &query);

        at_most_one(&self.address, EdgeType::Contains.as_tag(), containers)?
            .map(|n| resolve_entity(self.graph, n.node))
            .transpose()
    }
}

impl<'g> Post<'g> for Comment<'g> {}

impl<'g> Author<'g> {
    pub fn login(&self) -> Result<String> {
        self.field("login")
    }

    pub fn subtype(&self) -> Result<AuthorSubtype> {
        self.field("subtype")
    }

    /// Everything this author wrote, of any post variant.
    pub fn posts(&self) -> Result<Vec<Entity<'g>>> {
        let query = NeighborhoodQuery::new()
            .edge_type(EdgeType::Authors.as_tag())
            .direction(Direction::In);
        resolve_neighbors(self.graph, self.graph.neighborhood(&self.address, &query))
    }
}

impl<'g> Review<'g> {
    pub fn state(&self) -> Result<ReviewState> {
        self.field("state")
    }

    pub fn comments(&self) -> Result<Vec<ReviewComment<'g>>> {
        related(self.graph, &self.address, EdgeType::Contains, Direction::Out)
    }

    /// The pull request this review belongs to.
    pub fn pull_request(&self) -> Result<Option<PullRequest<'g>>> {
        container(self.graph, &self.address)
    }
}

impl<'g> Post<'g> for Review<'g> {}

impl<'g> ReviewComment<'g> {
    /// The review this comment belongs to.
    pub fn review(&self) -> Result<Option<Review<'g>>> {
        container(self.graph, &self.address)
    }
}

impl<'g> Post<'g> for ReviewComment<'g> {}

/// The unique `CONTAINS` parent of variant `V`.
fn container<'g, V: GitHubEntity<'g>>(
    graph: &'g Graph,
    address: &Address,
) -> Result<Option<V>> {
    let query = NeighborhoodQuery::new()
        .edge_type(EdgeType::Contains.as_tag())
        .node_type(V::NODE_TYPE.as_tag())
        .direction(Direction::In);
    let containers = graph.neighborhood(address, &query);

    at_most_one(address, EdgeType::Contains.as_tag(), containers)?
        .map(|n| resolve_as(graph, n.node))
        .transpose()
}
