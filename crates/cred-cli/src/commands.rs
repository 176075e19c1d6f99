//! CLI command implementations.

use colored::Colorize;
use cred_github::{Commentable, Entity, GitHubEntity, NodeType, Porcelain, PorcelainError, Post};
use cred_graph::Graph;
use serde_json::{json, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads a graph snapshot from a JSON file.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let reader = BufReader::new(File::open(path)?);
    let graph: Graph = serde_json::from_reader(reader)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded snapshot"
    );
    Ok(graph)
}

/// Print node and edge counts per type.
pub fn stats(path: &Path) -> Result<()> {
    let graph = load_graph(path)?;
    let stats = graph.stats();

    println!("{}", "Graph Stats".cyan().bold());
    println!();
    println!("  {} {}", "Nodes:".dimmed(), stats.node_count);
    for (tag, count) in &stats.nodes_by_type {
        println!("    {:<16} {}", tag, count);
    }
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    for (tag, count) in &stats.edges_by_type {
        println!("    {:<16} {}", tag, count);
    }

    Ok(())
}

/// List every repository.
pub fn repos(path: &Path) -> Result<()> {
    let graph = load_graph(path)?;
    let repos = Porcelain::new(&graph).repositories()?;

    if repos.is_empty() {
        println!("No repositories in {}", path.display());
        return Ok(());
    }

    println!("Found {} repositories:\n", repos.len());
    for repo in repos {
        println!(
            "  {}/{}  {}",
            repo.owner()?.cyan(),
            repo.name()?.cyan(),
            repo.url()?.dimmed()
        );
    }

    Ok(())
}

/// Resolve one address and print it.
pub fn show(path: &Path, type_tag: &str, id: &str, json_output: bool) -> Result<()> {
    let graph = load_graph(path)?;

    let node_type = NodeType::from_tag(type_tag)
        .ok_or_else(|| format!("Unknown node type '{}'", type_tag))?;
    let entity = Porcelain::new(&graph).entity(&node_type.address(id))?;

    print_entity(&entity, json_output)
}

/// Find an issue or pull request by number in `owner/name`.
pub fn lookup(path: &Path, repo: &str, number: u64, json_output: bool) -> Result<()> {
    let graph = load_graph(path)?;

    let (owner, name) = repo
        .split_once('/')
        .ok_or_else(|| format!("Repository must be OWNER/NAME, got '{}'", repo))?;
    let repository = Porcelain::new(&graph)
        .repository(owner, name)?
        .ok_or_else(|| format!("Repository '{}' not found", repo))?;

    match repository.issue_or_pr_by_number(number)? {
        Some(entity) => print_entity(&entity, json_output),
        None => Err(format!("No issue or pull request #{} in {}", number, repo).into()),
    }
}

fn print_entity(entity: &Entity<'_>, json_output: bool) -> Result<()> {
    let described = describe(entity)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&described)?);
        return Ok(());
    }

    println!(
        "{} {}",
        entity.type_tag().cyan().bold(),
        entity.address().id
    );
    if let Value::Object(fields) = &described {
        for (key, value) in fields {
            if key == "address" || key == "type" {
                continue;
            }
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            println!("  {} {}", format!("{}:", key).dimmed(), shown);
        }
    }

    Ok(())
}

/// JSON description of an entity: its fields and the ids of its direct
/// relationships.
pub fn describe(entity: &Entity<'_>) -> std::result::Result<Value, PorcelainError> {
    let mut out = json!({
        "address": entity.address().to_string(),
        "type": entity.type_tag(),
        "url": entity.url()?,
    });

    let extra = match entity {
        Entity::Repository(repo) => json!({
            "owner": repo.owner()?,
            "name": repo.name()?,
        }),
        Entity::Issue(issue) => json!({
            "number": issue.number()?,
            "title": issue.title()?,
            "body": issue.body()?,
            "authors": logins(issue.authors()?)?,
            "comments": ids(issue.comments()?),
            "references": entity_ids(&issue.references()?),
        }),
        Entity::PullRequest(pull) => json!({
            "number": pull.number()?,
            "title": pull.title()?,
            "body": pull.body()?,
            "authors": logins(pull.authors()?)?,
            "comments": ids(pull.comments()?),
            "reviews": ids(pull.reviews()?),
            "references": entity_ids(&pull.references()?),
            "merge_commit": pull.merge_commit_hash()?,
        }),
        Entity::Comment(comment) => json!({
            "body": comment.body()?,
            "authors": logins(comment.authors()?)?,
            "parent": comment.parent()?.map(|p| p.address().to_string()),
            "references": entity_ids(&comment.references()?),
        }),
        Entity::Author(author) => json!({
            "login": author.login()?,
            "subtype": author.subtype()?.to_string(),
            "posts": entity_ids(&author.posts()?),
        }),
        Entity::Review(review) => json!({
            "state": review.state()?.to_string(),
            "body": review.body()?,
            "authors": logins(review.authors()?)?,
            "comments": ids(review.comments()?),
            "references": entity_ids(&review.references()?),
        }),
        Entity::ReviewComment(comment) => json!({
            "body": comment.body()?,
            "authors": logins(comment.authors()?)?,
            "review": comment.review()?.map(|r| r.address().to_string()),
            "references": entity_ids(&comment.references()?),
        }),
    };

    if let (Value::Object(out), Value::Object(extra)) = (&mut out, extra) {
        out.extend(extra);
    }

    Ok(out)
}

fn logins(
    authors: Vec<cred_github::Author<'_>>,
) -> std::result::Result<Vec<String>, PorcelainError> {
    authors.iter().map(|a| a.login()).collect()
}

fn ids<'g, V: GitHubEntity<'g>>(entities: Vec<V>) -> Vec<String> {
    entities.iter().map(|e| e.address().to_string()).collect()
}

fn entity_ids(entities: &[Entity<'_>]) -> Vec<String> {
    entities.iter().map(|e| e.address().to_string()).collect()
}
