//! Command-line interface definition.
//!
//! - `modtree tree <DIR>` - mirror a directory as a dependency tree
//! - `modtree graph <FILE>` - every module reachable from one entry

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Command, GraphArgs, OutputArgs, TreeArgs};

/// modtree - static module-dependency graphs for JavaScript and TypeScript
#[derive(Parser, Debug)]
#[command(
    name = "modtree",
    version,
    about = "Static module-dependency graphs for JavaScript and TypeScript",
    long_about = "modtree parses ES-module sources, resolves their relative imports and\n\
                  prints the resulting dependency tree or graph as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to ./modtree.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
