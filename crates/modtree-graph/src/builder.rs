//! Entry points for both build modes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analyzer::FileAnalyzer;
use crate::assembler::GraphAssembler;
use crate::config::GraphConfig;
use crate::error::Result;
use crate::resolver::ModuleResolver;
use crate::runtime::{Runtime, RuntimeError};
use crate::walker::DirectoryWalker;
use crate::{DependencyTree, ModuleGraph, ModuleId};

/// Configures and runs graph builds.
///
/// Relative input paths are made absolute against the runtime's working
/// directory. Without an explicit runtime the native filesystem is used.
///
/// ```rust,no_run
/// use modtree_graph::GraphBuilder;
///
/// # async fn example() -> modtree_graph::Result<()> {
/// let graph = GraphBuilder::new().build_from_root("src/index.ts").await?;
/// for (id, leaf) in &graph.modules {
///     println!("{id}: {} imports", leaf.imports.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
    runtime: Option<Arc<dyn Runtime>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the runtime for filesystem operations.
    pub fn runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Directory-walk mode: mirror `dir` as a tree of analysed modules.
    pub async fn walk_directory(&self, dir: impl AsRef<Path>) -> Result<DependencyTree> {
        let runtime = self.resolve_runtime()?;
        let dir = absolutize(dir.as_ref(), runtime.as_ref())?;
        let analyzer = self.analyzer();

        DirectoryWalker::new(&analyzer, &self.config)
            .walk_directory(&dir, runtime.as_ref())
            .await
    }

    /// Reachability mode: every module reachable from `entry`.
    pub async fn build_from_root(&self, entry: impl AsRef<Path>) -> Result<ModuleGraph> {
        let runtime = self.resolve_runtime()?;
        let entry = absolutize(entry.as_ref(), runtime.as_ref())?;
        let analyzer = self.analyzer();

        GraphAssembler::new(&analyzer)
            .build_from_root(&entry, runtime.as_ref())
            .await
    }

    fn analyzer(&self) -> FileAnalyzer {
        FileAnalyzer::new(ModuleResolver::new(&self.config), self.config.max_file_size)
    }

    fn resolve_runtime(&self) -> std::result::Result<Arc<dyn Runtime>, RuntimeError> {
        match &self.runtime {
            Some(runtime) => Ok(Arc::clone(runtime)),
            None => default_runtime(),
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn default_runtime() -> std::result::Result<Arc<dyn Runtime>, RuntimeError> {
    Ok(Arc::new(crate::runtime::native::NativeRuntime::new()))
}

#[cfg(target_family = "wasm")]
fn default_runtime() -> std::result::Result<Arc<dyn Runtime>, RuntimeError> {
    Err(RuntimeError::Other(
        "no runtime configured; call GraphBuilder::runtime".to_string(),
    ))
}

fn absolutize(path: &Path, runtime: &dyn Runtime) -> std::result::Result<PathBuf, RuntimeError> {
    if path.is_absolute() {
        return Ok(ModuleId::new(path).into_path_buf());
    }
    let cwd = runtime.get_cwd()?;
    Ok(ModuleId::from_relative(&cwd, path).into_path_buf())
}
