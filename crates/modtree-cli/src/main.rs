//! Entry point of the `modtree` binary.
//!
//! Parses arguments, installs logging and dispatches to a command.

use std::path::Path;

use clap::Parser;
use miette::Result;
use modtree_cli::{cli, commands, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    // Keep the whole context chain in the report.
    run(args.config.as_deref(), args.command)
        .await
        .map_err(|err| miette::miette!("{err:?}"))
}

async fn run(config_path: Option<&Path>, command: cli::Command) -> anyhow::Result<()> {
    let config = commands::load_config(config_path)?;
    match command {
        cli::Command::Tree(args) => commands::tree_execute(args, config).await,
        cli::Command::Graph(args) => commands::graph_execute(args, config).await,
    }
}
