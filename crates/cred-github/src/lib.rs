//! Credgraph GitHub - typed entities over GitHub graph data
//!
//! This crate is the porcelain for the GitHub plugin. It turns addresses
//! in a [`cred_graph::Graph`] into typed entities and answers their
//! relationships with neighborhood queries.
//!
//! # Architecture
//!
//! - [`resolve_entity`] dispatches an address to one [`Entity`] variant
//! - [`GitHubEntity`] is the base every variant implements
//! - [`Post`] and [`Commentable`] are capabilities variants opt into
//! - [`Porcelain`] offers graph-wide entry points
//!
//! Entities borrow the graph and hold an address. Nothing is cached: each
//! accessor reads the graph as it is at call time.
//!
//! # Example
//!
//! ```
//! use cred_github::{
//!     AuthorPayload, AuthorSubtype, GitHubEntity, GitHubGraphBuilder, Issue, IssuePayload,
//!     Porcelain, Post,
//! };
//!
//! let mut builder = GitHubGraphBuilder::new();
//! let issue = builder
//!     .issue(
//!         "acme/widgets#1",
//!         IssuePayload {
//!             url: "https://github.com/acme/widgets/issues/1".into(),
//!             number: 1,
//!             title: "Bug".into(),
//!             body: "It breaks".into(),
//!         },
//!     )
//!     .unwrap();
//! let author = builder
//!     .author(AuthorPayload {
//!         url: "https://github.com/octocat".into(),
//!         login: "octocat".into(),
//!         subtype: AuthorSubtype::User,
//!     })
//!     .unwrap();
//! builder.authors(&issue, &author).unwrap();
//! let graph = builder.build();
//!
//! let porcelain = Porcelain::new(&graph);
//! let issue = Issue::from_entity(porcelain.entity(&issue).unwrap()).unwrap();
//! assert_eq!(issue.title().unwrap(), "Bug");
//! assert_eq!(issue.authors().unwrap()[0].login().unwrap(), "octocat");
//! ```

mod builder;
mod capability;
mod entity;
mod error;
mod payload;
mod porcelain;
mod types;
mod variants;

#[cfg(test)]
mod fixtures;

pub use builder::GitHubGraphBuilder;
pub use capability::{Commentable, Post};
pub use entity::{resolve_entity, Entity, GitHubEntity};
pub use error::{PorcelainError, Result};
pub use payload::{
    AuthorPayload, AuthorSubtype, CommentPayload, CommitPayload, IssuePayload, MergedAsPayload,
    NodePayload, PullRequestPayload, RepositoryPayload, ReviewCommentPayload, ReviewPayload,
    ReviewState,
};
pub use porcelain::Porcelain;
pub use types::{commit_address, EdgeType, NodeType, COMMIT_TYPE, GITHUB_NAMESPACE, GIT_NAMESPACE};
pub use variants::{Author, Comment, Issue, PullRequest, Repository, Review, ReviewComment};
