// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// gallerist - personal image/document archive maintenance
///
/// Reorganizes archive files into the target taxonomy and generates the
/// gallery.json manifest consumed by the static gallery viewer. Both
/// subcommands operate on the current directory as the archive root.
#[derive(Parser, Debug)]
#[command(name = "gallerist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the relocation plan from reorganize.toml and print a summary
    Reorganize,
    /// Rebuild gallery.json from the files on disk
    Index,
}
