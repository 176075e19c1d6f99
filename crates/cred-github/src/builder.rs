//! Graph builder for assembling GitHub data into a graph.
//!
//! The builder owns address conventions so callers hand it typed payloads
//! and get addresses back. Node ids are supplied by the caller except for
//! repositories (`owner/name`), authors (`login`), and commits (hash).
//! Edge addresses are derived from their endpoints.

use crate::error::{PorcelainError, Result};
use crate::payload::{
    AuthorPayload, CommentPayload, CommitPayload, IssuePayload, MergedAsPayload, NodePayload,
    PullRequestPayload, RepositoryPayload, ReviewCommentPayload, ReviewPayload,
};
use crate::types::{commit_address, EdgeType, GITHUB_NAMESPACE};
use cred_graph::{Address, Edge, Graph, Node};
use serde_json::Value;
use tracing::debug;

/// Builds a [`Graph`] of GitHub entities.
pub struct GitHubGraphBuilder {
    graph: Graph,
}

impl Default for GitHubGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubGraphBuilder {
    /// Creates a builder over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Adds a node of whatever type `payload` is.
    pub fn node(
        &mut self,
        id: impl Into<String>,
        payload: impl Into<NodePayload>,
    ) -> Result<Address> {
        let payload = payload.into();
        let address = payload.node_type().address(id);
        self.graph.add_node(Node::new(address.clone(), payload.to_json()?))?;
        Ok(address)
    }

    /// Adds a repository, addressed as `owner/name`.
    pub fn repository(&mut self, payload: RepositoryPayload) -> Result<Address> {
        let id = format!("{}/{}", payload.owner, payload.name);
        self.node(id, payload)
    }

    pub fn issue(&mut self, id: impl Into<String>, payload: IssuePayload) -> Result<Address> {
        self.node(id, payload)
    }

    pub fn pull_request(
        &mut self,
        id: impl Into<String>,
        payload: PullRequestPayload,
    ) -> Result<Address> {
        self.node(id, payload)
    }

    pub fn comment(&mut self, id: impl Into<String>, payload: CommentPayload) -> Result<Address> {
        self.node(id, payload)
    }

    /// Adds an author, addressed by login.
    pub fn author(&mut self, payload: AuthorPayload) -> Result<Address> {
        let id = payload.login.clone();
        self.node(id, payload)
    }

    pub fn review(&mut self, id: impl Into<String>, payload: ReviewPayload) -> Result<Address> {
        self.node(id, payload)
    }

    pub fn review_comment(
        &mut self,
        id: impl Into<String>,
        payload: ReviewCommentPayload,
    ) -> Result<Address> {
        self.node(id, payload)
    }

    /// Adds a git commit node, addressed by hash.
    pub fn commit(&mut self, hash: impl Into<String>) -> Result<Address> {
        let hash = hash.into();
        let address = commit_address(hash.clone());
        let payload = serde_json::to_value(CommitPayload { hash })?;
        self.graph.add_node(Node::new(address.clone(), payload))?;
        Ok(address)
    }

    /// `post` was written by `author`.
    pub fn authors(&mut self, post: &Address, author: &Address) -> Result<Address> {
        self.github_edge(EdgeType::Authors, post, author)
    }

    /// `container` holds `child`.
    pub fn contains(&mut self, container: &Address, child: &Address) -> Result<Address> {
        self.github_edge(EdgeType::Contains, container, child)
    }

    /// `post` mentions `target`.
    pub fn references(&mut self, post: &Address, target: &Address) -> Result<Address> {
        self.github_edge(EdgeType::References, post, target)
    }

    /// `pull` was merged as `commit`.
    pub fn merged_as(&mut self, pull: &Address, commit: &Address, hash: &str) -> Result<Address> {
        require_github(pull)?;
        let payload = serde_json::to_value(MergedAsPayload {
            hash: hash.to_string(),
        })?;
        self.edge(EdgeType::MergedAs, pull, commit, payload)
    }

    /// An empty-payload edge whose endpoints both resolve as GitHub entities.
    fn github_edge(
        &mut self,
        edge_type: EdgeType,
        src: &Address,
        dst: &Address,
    ) -> Result<Address> {
        require_github(src)?;
        require_github(dst)?;
        self.edge(edge_type, src, dst, Value::Object(Default::default()))
    }

    fn edge(
        &mut self,
        edge_type: EdgeType,
        src: &Address,
        dst: &Address,
        payload: Value,
    ) -> Result<Address> {
        let address = edge_type.address(src, dst);
        self.graph.add_edge(Edge::new(
            address.clone(),
            src.clone(),
            dst.clone(),
            payload,
        ))?;
        Ok(address)
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> Graph {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built github graph"
        );
        self.graph
    }
}

fn require_github(address: &Address) -> Result<()> {
    if address.in_namespace(GITHUB_NAMESPACE) {
        Ok(())
    } else {
        Err(PorcelainError::WrongNamespace {
            address: address.clone(),
            expected: GITHUB_NAMESPACE,
        })
    }
}
