//! Typed payloads for GitHub nodes and edges.
//!
//! The graph stores payloads as JSON. These types are the schema the
//! porcelain reads them back through and the builder writes them with.

use crate::types::NodeType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPayload {
    pub url: String,
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub url: String,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    pub url: String,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub url: String,
    #[serde(default)]
    pub body: String,
}

/// What kind of account an author is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorSubtype {
    User,
    Bot,
    Organization,
}

impl std::fmt::Display for AuthorSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::Organization => "organization",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub url: String,
    pub login: String,
    pub subtype: AuthorSubtype,
}

/// Outcome of a pull request review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Approved => "approved",
            Self::ChangesRequested => "changes_requested",
            Self::Commented => "commented",
            Self::Dismissed => "dismissed",
            Self::Pending => "pending",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub url: String,
    #[serde(default)]
    pub body: String,
    pub state: ReviewState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCommentPayload {
    pub url: String,
    #[serde(default)]
    pub body: String,
}

/// Payload of a `MERGED_AS` edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedAsPayload {
    pub hash: String,
}

/// Payload of a git commit node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitPayload {
    pub hash: String,
}

/// Any GitHub node payload, keyed by node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    Repository(RepositoryPayload),
    Issue(IssuePayload),
    PullRequest(PullRequestPayload),
    Comment(CommentPayload),
    Author(AuthorPayload),
    Review(ReviewPayload),
    ReviewComment(ReviewCommentPayload),
}

impl NodePayload {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodePayload::Repository(_) => NodeType::Repository,
            NodePayload::Issue(_) => NodeType::Issue,
            NodePayload::PullRequest(_) => NodeType::PullRequest,
            NodePayload::Comment(_) => NodeType::Comment,
            NodePayload::Author(_) => NodeType::Author,
            NodePayload::Review(_) => NodeType::Review,
            NodePayload::ReviewComment(_) => NodeType::ReviewComment,
        }
    }

    /// Every GitHub payload carries a url.
    pub fn url(&self) -> &str {
        match self {
            NodePayload::Repository(p) => &p.url,
            NodePayload::Issue(p) => &p.url,
            NodePayload::PullRequest(p) => &p.url,
            NodePayload::Comment(p) => &p.url,
            NodePayload::Author(p) => &p.url,
            NodePayload::Review(p) => &p.url,
            NodePayload::ReviewComment(p) => &p.url,
        }
    }

    /// Encodes the inner payload as stored in the graph.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            NodePayload::Repository(p) => serde_json::to_value(p),
            NodePayload::Issue(p) => serde_json::to_value(p),
            NodePayload::PullRequest(p) => serde_json::to_value(p),
            NodePayload::Comment(p) => serde_json::to_value(p),
            NodePayload::Author(p) => serde_json::to_value(p),
            NodePayload::Review(p) => serde_json::to_value(p),
            NodePayload::ReviewComment(p) => serde_json::to_value(p),
        }
    }
}

macro_rules! node_payload_from {
    ($($variant:ident => $payload:ty),* $(,)?) => {
        $(
            impl From<$payload> for NodePayload {
                fn from(payload: $payload) -> Self {
                    NodePayload::$variant(payload)
                }
            }
        )*
    };
}

node_payload_from! {
    Repository => RepositoryPayload,
    Issue => IssuePayload,
    PullRequest => PullRequestPayload,
    Comment => CommentPayload,
    Author => AuthorPayload,
    Review => ReviewPayload,
    ReviewComment => ReviewCommentPayload,
}
