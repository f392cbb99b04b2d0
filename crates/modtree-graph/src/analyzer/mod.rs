//! Per-file analysis.
//!
//! Reads one module, parses it with the flags its extension selects, resolves
//! every import source and produces a [`LeafNode`]. Edges are recorded in the
//! build context and queued for the link phase; nothing is linked here,
//! because the target of an edge may not have been analysed yet.

mod parser;

pub use parser::{ImportStatement, ParsedModule, parse_module_structure};

use std::path::Path;

use crate::context::BuildContext;
use crate::error::{GraphError, Result};
use crate::resolver::{ModuleResolver, ResolveResult};
use crate::runtime::Runtime;
use crate::{Dialect, ImportRecord, LeafNode, ModuleId};

/// Reads, parses and registers single modules.
#[derive(Debug, Clone)]
pub struct FileAnalyzer {
    resolver: ModuleResolver,
    max_file_size: u64,
}

impl FileAnalyzer {
    pub fn new(resolver: ModuleResolver, max_file_size: u64) -> Self {
        Self {
            resolver,
            max_file_size,
        }
    }

    /// Analyse `id` and register its leaf in `ctx`.
    ///
    /// Returns the resolved import targets in discovery order, one entry per
    /// distinct target.
    pub async fn analyze(
        &self,
        id: &ModuleId,
        ctx: &mut BuildContext,
        runtime: &dyn Runtime,
    ) -> Result<Vec<ModuleId>> {
        let path = id.path();
        let dialect = Dialect::from_path(path).ok_or_else(|| GraphError::Parse {
            path: path.to_path_buf(),
            message: "unsupported file extension".to_string(),
        })?;

        let source = self.read_source(path, runtime).await?;
        let parsed =
            parse_module_structure(&source, dialect).map_err(|message| GraphError::Parse {
                path: path.to_path_buf(),
                message,
            })?;

        let mut leaf = LeafNode::new(id.clone(), dialect);
        for statement in parsed.imports {
            let target = match self
                .resolver
                .resolve(path, &statement.source, runtime)
                .await?
            {
                ResolveResult::Local(target) => target,
                ResolveResult::External(_) => continue,
            };

            ctx.record_edge(id, &target);
            leaf.imports
                .entry(target)
                .and_modify(|record| {
                    record.merge_statement(&statement.source, statement.bindings.clone())
                })
                .or_insert_with(|| {
                    let mut record = ImportRecord::new(statement.source.clone());
                    record.bindings = statement.bindings.clone();
                    record
                });
        }
        leaf.exports = parsed.exports;

        tracing::debug!(
            imports = leaf.imports.len(),
            exports = leaf.exports.len(),
            reexports = leaf.exports.iter().filter(|e| e.is_reexport()).count(),
            "Analyzed {}",
            id
        );

        let targets = leaf.imports.keys().cloned().collect();
        ctx.register(leaf);
        Ok(targets)
    }

    /// Read a module with size and encoding checks.
    async fn read_source(&self, path: &Path, runtime: &dyn Runtime) -> Result<String> {
        if let Ok(metadata) = runtime.metadata(path).await {
            if metadata.size > self.max_file_size {
                return Err(GraphError::FileTooLarge {
                    path: path.to_path_buf(),
                    size: metadata.size,
                    max: self.max_file_size,
                });
            }
        }

        let bytes = runtime
            .read_file(path)
            .await
            .map_err(|source| GraphError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        if bytes.len() as u64 > self.max_file_size {
            return Err(GraphError::FileTooLarge {
                path: path.to_path_buf(),
                size: bytes.len() as u64,
                max: self.max_file_size,
            });
        }

        String::from_utf8(bytes).map_err(|_| GraphError::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    }
}
