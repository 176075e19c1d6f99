//! Graph-wide entry points into the GitHub entity layer.

use crate::entity::{resolve_entity, Entity, GitHubEntity};
use crate::error::Result;
use crate::types::{NodeType, GITHUB_NAMESPACE};
use crate::variants::Repository;
use cred_graph::{Address, Graph};

/// Typed access to the GitHub entities in a graph.
///
/// Holds only a borrow of the graph; creating one is free.
#[derive(Debug, Clone, Copy)]
pub struct Porcelain<'g> {
    graph: &'g Graph,
}

impl<'g> Porcelain<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Resolves any GitHub address.
    pub fn entity(&self, address: &Address) -> Result<Entity<'g>> {
        resolve_entity(self.graph, address)
    }

    /// Every repository in the graph, in insertion order.
    pub fn repositories(&self) -> Result<Vec<Repository<'g>>> {
        self.graph
            .nodes_of_type(NodeType::Repository.as_tag())
            .into_iter()
            .filter(|node| node.address.in_namespace(GITHUB_NAMESPACE))
            .map(|node| Repository::from_entity(self.entity(&node.address)?))
            .collect()
    }

    /// The repository `owner/name`, matched on payload fields.
    ///
    /// Returns `None` when the graph has no such repository.
    pub fn repository(&self, owner: &str, name: &str) -> Result<Option<Repository<'g>>> {
        for repo in self.repositories()? {
            if repo.owner()? == owner && repo.name()? == name {
                return Ok(Some(repo));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GitHubGraphBuilder;
    use crate::payload::RepositoryPayload;

    fn two_repos() -> Graph {
        let mut builder = GitHubGraphBuilder::new();
        for (owner, name) in [("acme", "widgets"), ("acme", "gadgets")] {
            builder
                .repository(RepositoryPayload {
                    url: format!("https://github.com/{}/{}", owner, name),
                    owner: owner.into(),
                    name: name.into(),
                })
                .unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_repositories_in_insertion_order() {
        let graph = two_repos();
        let porcelain = Porcelain::new(&graph);

        let names: Vec<String> = porcelain
            .repositories()
            .unwrap()
            .iter()
            .map(|r| r.name().unwrap())
            .collect();
        assert_eq!(names, vec!["widgets", "gadgets"]);
    }

    #[test]
    fn test_repository_lookup() {
        let graph = two_repos();
        let porcelain = Porcelain::new(&graph);

        let repo = porcelain.repository("acme", "gadgets").unwrap().unwrap();
        assert_eq!(repo.url().unwrap(), "https://github.com/acme/gadgets");
        assert!(porcelain.repository("acme", "missing").unwrap().is_none());
        assert!(porcelain.repository("other", "widgets").unwrap().is_none());
    }

    #[test]
    fn test_empty_graph_has_no_repositories() {
        let graph = Graph::new();
        assert!(Porcelain::new(&graph).repositories().unwrap().is_empty());
    }
}
