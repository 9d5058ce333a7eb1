//! gallerist - personal image/document archive maintenance
//!
//! Two sequential tools sharing one archive root: a mover applying a static
//! relocation plan, and an indexer emitting the gallery manifest.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = gallerist::config::resolve_root()?;

    match cli.command {
        Commands::Reorganize => gallerist::mover::run(&root)?,
        Commands::Index => gallerist::indexer::run(&root)?,
    }

    Ok(())
}
