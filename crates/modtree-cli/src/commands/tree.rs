use anyhow::{Context, Result};
use modtree_graph::{GraphBuilder, GraphConfig};

use super::utils::write_output;
use crate::cli::TreeArgs;

pub async fn execute(args: TreeArgs, config: GraphConfig) -> Result<()> {
    let tree = GraphBuilder::new()
        .config(config)
        .walk_directory(&args.dir)
        .await
        .with_context(|| format!("Failed to build dependency tree for {}", args.dir.display()))?;

    tracing::info!(
        "Analyzed {} module(s) under {}",
        tree.modules.len(),
        tree.root.path.display()
    );

    write_output(&tree, &args.output).await
}
