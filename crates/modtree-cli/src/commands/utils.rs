use std::path::Path;

use anyhow::{Context, Result};
use modtree_graph::GraphConfig;
use serde::Serialize;
use tokio::fs;

use crate::cli::OutputArgs;

/// Load layered configuration, with `path` overriding `./modtree.toml`.
pub fn load_config(path: Option<&Path>) -> Result<GraphConfig> {
    let config = GraphConfig::load(path).context("Failed to load configuration")?;
    tracing::debug!(
        vendor_dirs = ?config.vendor_dirs,
        max_file_size = config.max_file_size,
        "Configuration loaded"
    );
    Ok(config)
}

pub fn render_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize result")
}

/// Print `value` to stdout or write it to the requested file.
pub async fn write_output<T: Serialize>(value: &T, output: &OutputArgs) -> Result<()> {
    let json = render_json(value, output.compact)?;

    match &output.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
            }
            fs::write(path, json.into_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_compact_is_single_line() {
        let value = serde_json::json!({ "a": [1, 2] });
        assert_eq!(render_json(&value, true).unwrap(), r#"{"a":[1,2]}"#);
        assert!(render_json(&value, false).unwrap().contains('\n'));
    }
}
