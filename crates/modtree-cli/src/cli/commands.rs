use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mirror a directory as a dependency tree
    ///
    /// Every JavaScript/TypeScript module below DIR is analysed. Directories
    /// are listed before files at each level; vendor directories are skipped.
    Tree(TreeArgs),

    /// Build the graph of modules reachable from one entry
    ///
    /// Follows relative imports depth-first from FILE. Bare package imports
    /// and vendored paths are left out.
    Graph(GraphArgs),
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory to walk
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Entry module
    #[arg(value_name = "FILE")]
    pub entry: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Where and how the JSON result is written.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,

    /// Write the JSON to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
