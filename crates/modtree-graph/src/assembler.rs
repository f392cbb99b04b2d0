//! Reachability mode.
//!
//! Starting from one module, follows resolved imports depth-first and builds
//! a flat map of every module reached. A module is claimed in the visited set
//! before it is descended into, so import cycles terminate.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::analyzer::FileAnalyzer;
use crate::context::BuildContext;
use crate::dialect::is_module_file;
use crate::error::{GraphError, Result};
use crate::linker::link_all;
use crate::runtime::{Runtime, RuntimeError};
use crate::walker::BoxFuture;
use crate::{LeafNode, ModuleGraph, ModuleId};

pub struct GraphAssembler<'a> {
    analyzer: &'a FileAnalyzer,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(analyzer: &'a FileAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Build the graph of every module reachable from `entry`.
    ///
    /// `entry` must be an absolute path to a module file.
    pub async fn build_from_root(&self, entry: &Path, runtime: &dyn Runtime) -> Result<ModuleGraph> {
        let root_id = ModuleId::new(entry);
        let mut ctx = BuildContext::new();

        ctx.mark_visited(&root_id);
        self.visit(root_id.clone(), &mut ctx, runtime).await?;
        let stats = link_all(&mut ctx);

        let modules: IndexMap<ModuleId, Arc<LeafNode>> = ctx
            .registry
            .into_iter()
            .map(|(id, leaf)| (id, Arc::new(leaf)))
            .collect();
        let root = modules.get(&root_id).cloned().ok_or_else(|| {
            GraphError::Runtime(RuntimeError::Other(format!(
                "entry module {root_id} was not registered"
            )))
        })?;

        tracing::debug!(
            modules = modules.len(),
            mutual = stats.mutual,
            "Assembled graph from {}",
            root_id
        );
        Ok(ModuleGraph { root, modules })
    }

    fn visit<'b>(
        &'b self,
        id: ModuleId,
        ctx: &'b mut BuildContext,
        runtime: &'b dyn Runtime,
    ) -> BoxFuture<'b, Result<()>> {
        Box::pin(async move {
            let targets = self.analyzer.analyze(&id, ctx, runtime).await?;

            for target in targets {
                if !is_module_file(target.path()) {
                    tracing::trace!("Not traversing asset {}", target);
                    continue;
                }
                if ctx.mark_visited(&target) {
                    self.visit(target, ctx, runtime).await?;
                }
            }
            Ok(())
        })
    }
}
