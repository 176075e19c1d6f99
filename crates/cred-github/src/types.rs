//! Node and edge types of the GitHub plugin.
//!
//! These are the closed sets the porcelain dispatches over. Adding a node
//! type here forces every exhaustive `match` on [`NodeType`] to handle it.

use cred_graph::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace of every address the GitHub plugin owns.
pub const GITHUB_NAMESPACE: &str = "credgraph/github";

/// Namespace of the git plugin, which owns commit nodes.
pub const GIT_NAMESPACE: &str = "credgraph/git";

/// Type tag of git commit nodes.
pub const COMMIT_TYPE: &str = "COMMIT";

/// The kinds of GitHub entity the porcelain can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Repository,
    Issue,
    PullRequest,
    Comment,
    Author,
    Review,
    ReviewComment,
}

impl NodeType {
    pub const ALL: [NodeType; 7] = [
        NodeType::Repository,
        NodeType::Issue,
        NodeType::PullRequest,
        NodeType::Comment,
        NodeType::Author,
        NodeType::Review,
        NodeType::ReviewComment,
    ];

    /// The type tag stored in addresses.
    pub fn as_tag(&self) -> &'static str {
        match self {
            NodeType::Repository => "REPOSITORY",
            NodeType::Issue => "ISSUE",
            NodeType::PullRequest => "PULL_REQUEST",
            NodeType::Comment => "COMMENT",
            NodeType::Author => "AUTHOR",
            NodeType::Review => "REVIEW",
            NodeType::ReviewComment => "REVIEW_COMMENT",
        }
    }

    /// Parses a type tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "REPOSITORY" => Some(NodeType::Repository),
            "ISSUE" => Some(NodeType::Issue),
            "PULL_REQUEST" => Some(NodeType::PullRequest),
            "COMMENT" => Some(NodeType::Comment),
            "AUTHOR" => Some(NodeType::Author),
            "REVIEW" => Some(NodeType::Review),
            "REVIEW_COMMENT" => Some(NodeType::ReviewComment),
            _ => None,
        }
    }

    /// Builds a GitHub node address of this type.
    pub fn address(&self, id: impl Into<String>) -> Address {
        Address::new(GITHUB_NAMESPACE, self.as_tag(), id)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Relationships between GitHub entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    /// Post to one of its authors.
    Authors,

    /// Container to contained: issue/PR to comment, PR to review, review
    /// to review comment.
    Contains,

    /// Post to any entity it mentions.
    References,

    /// Pull request to the commit it was merged as.
    MergedAs,
}

impl EdgeType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            EdgeType::Authors => "AUTHORS",
            EdgeType::Contains => "CONTAINS",
            EdgeType::References => "REFERENCES",
            EdgeType::MergedAs => "MERGED_AS",
        }
    }

    /// Builds the edge address for `src -> dst`.
    ///
    /// The id is derived from both endpoints, so one relationship of a
    /// given type exists per ordered node pair.
    pub fn address(&self, src: &Address, dst: &Address) -> Address {
        Address::new(GITHUB_NAMESPACE, self.as_tag(), format!("{}>{}", src, dst))
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Address of the git commit with the given hash.
pub fn commit_address(hash: impl Into<String>) -> Address {
    Address::new(GIT_NAMESPACE, COMMIT_TYPE, hash)
}
