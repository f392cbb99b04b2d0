use anyhow::{Context, Result};
use modtree_graph::{GraphBuilder, GraphConfig};

use super::utils::write_output;
use crate::cli::GraphArgs;

pub async fn execute(args: GraphArgs, config: GraphConfig) -> Result<()> {
    let graph = GraphBuilder::new()
        .config(config)
        .build_from_root(&args.entry)
        .await
        .with_context(|| format!("Failed to build module graph from {}", args.entry.display()))?;

    let mutual = graph
        .modules
        .values()
        .map(|leaf| leaf.mutual_references().count())
        .sum::<usize>();
    tracing::info!(
        "Reached {} module(s) from {} ({} mutual edge(s))",
        graph.modules.len(),
        graph.root.id,
        mutual
    );

    write_output(&graph, &args.output).await
}
