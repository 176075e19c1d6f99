//! Capability traits shared across entity variants.
//!
//! `Post` covers anything with authors and a body. `Commentable` covers
//! the posts that hold top-level comments. Variants opt in with an empty
//! `impl`; the default methods do the work.

use crate::entity::{related, resolve_neighbors, Entity, GitHubEntity};
use crate::error::Result;
use crate::types::EdgeType;
use crate::variants::{Author, Comment};
use cred_graph::{Direction, NeighborhoodQuery};

/// Authored content: issues, pull requests, comments, reviews, and review
/// comments.
pub trait Post<'g>: GitHubEntity<'g> {
    /// Authors in neighborhood order.
    fn authors(&self) -> Result<Vec<Author<'g>>> {
        related(self.graph(), self.address(), EdgeType::Authors, Direction::Out)
    }

    /// Body text. A post stored without one has an empty body.
    fn body(&self) -> Result<String> {
        Ok(self.field::<Option<String>>("body")?.unwrap_or_default())
    }

    /// Everything this post references. The result mixes variants.
    fn references(&self) -> Result<Vec<Entity<'g>>> {
        let query = NeighborhoodQuery::new()
            .edge_type(EdgeType::References.as_tag())
            .direction(Direction::Out);
        let graph = self.graph();
        resolve_neighbors(graph, graph.neighborhood(self.address(), &query))
    }
}

/// Posts that hold top-level comments: issues and pull requests.
pub trait Commentable<'g>: GitHubEntity<'g> {
    fn comments(&self) -> Result<Vec<Comment<'g>>> {
        related(self.graph(), self.address(), EdgeType::Contains, Direction::Out)
    }
}
