//! Credgraph CLI - inspect GitHub graph snapshots
//!
//! Loads a graph snapshot written by the ingestion side and prints the
//! typed view the porcelain gives of it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "cred")]
#[command(author = "Credgraph Contributors")]
#[command(version)]
#[command(about = "Typed views over credgraph GitHub snapshots", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node and edge counts per type
    Stats {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,
    },

    /// List repositories in the graph
    Repos {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Resolve one GitHub address and show its fields and relationships
    Show {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Node type tag, e.g. ISSUE or PULL_REQUEST
        type_tag: String,

        /// Node id
        id: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find an issue or pull request by number
    Lookup {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Repository as OWNER/NAME
        repo: String,

        /// Issue or pull request number
        number: u64,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Stats { snapshot } => commands::stats(&snapshot),
        Commands::Repos { snapshot } => commands::repos(&snapshot),
        Commands::Show {
            snapshot,
            type_tag,
            id,
            json,
        } => commands::show(&snapshot, &type_tag, &id, json),
        Commands::Lookup {
            snapshot,
            repo,
            number,
            json,
        } => commands::lookup(&snapshot, &repo, number, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
