//! Directory-walk mode.
//!
//! Mirrors a directory on disk as a [`TreeNode`], analysing every module file
//! it contains. Linking runs once the whole tree has been visited, and only
//! then are the leaves frozen into the returned tree.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::analyzer::FileAnalyzer;
use crate::config::GraphConfig;
use crate::context::BuildContext;
use crate::dialect::is_module_file;
use crate::error::{GraphError, Result};
use crate::linker::link_all;
use crate::runtime::Runtime;
use crate::{DependencyTree, LeafNode, ModuleId, Node, TreeNode};

#[cfg(not(target_family = "wasm"))]
pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
#[cfg(target_family = "wasm")]
pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Shape of a visited directory before its leaves are linked.
#[derive(Debug)]
struct DirLayout {
    path: PathBuf,
    subdirs: Vec<DirLayout>,
    files: Vec<ModuleId>,
}

pub struct DirectoryWalker<'a> {
    analyzer: &'a FileAnalyzer,
    config: &'a GraphConfig,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(analyzer: &'a FileAnalyzer, config: &'a GraphConfig) -> Self {
        Self { analyzer, config }
    }

    /// Walk `dir`, analyse every module below it and link the result.
    ///
    /// `dir` must be absolute. Fails with [`GraphError::NotADirectory`] when it
    /// names anything other than a directory.
    pub async fn walk_directory(&self, dir: &Path, runtime: &dyn Runtime) -> Result<DependencyTree> {
        let is_dir = match runtime.metadata(dir).await {
            Ok(metadata) => metadata.is_dir,
            // A missing path that names a file is a caller error, not an I/O one.
            Err(_) if dir.extension().is_some() => false,
            Err(err) => return Err(err.into()),
        };
        if !is_dir {
            return Err(GraphError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut ctx = BuildContext::new();
        let layout = self.walk(dir.to_path_buf(), &mut ctx, runtime).await?;
        check_unread_targets(&ctx, runtime)?;
        link_all(&mut ctx);

        let modules: IndexMap<ModuleId, Arc<LeafNode>> = ctx
            .registry
            .into_iter()
            .map(|(id, leaf)| (id, Arc::new(leaf)))
            .collect();
        let root = materialize(layout, &modules);

        tracing::debug!(
            modules = modules.len(),
            "Walked directory {}",
            dir.display()
        );
        Ok(DependencyTree { root, modules })
    }

    fn walk<'b>(
        &'b self,
        dir: PathBuf,
        ctx: &'b mut BuildContext,
        runtime: &'b dyn Runtime,
    ) -> BoxFuture<'b, Result<DirLayout>> {
        Box::pin(async move {
            tracing::debug!("Entering directory {}", dir.display());

            let mut names = runtime.read_dir(&dir).await?;
            names.sort();

            let mut subdirs = Vec::new();
            let mut files = Vec::new();
            for name in names {
                let path = dir.join(&name);
                let metadata = runtime.metadata(&path).await?;
                if metadata.is_dir {
                    if self.config.is_vendor_dir(&name) {
                        tracing::trace!("Skipping vendor directory {}", path.display());
                        continue;
                    }
                    subdirs.push(path);
                } else if metadata.is_file && is_module_file(&path) {
                    files.push(ModuleId::new(path));
                }
            }

            let mut layout = DirLayout {
                path: dir,
                subdirs: Vec::with_capacity(subdirs.len()),
                files: Vec::with_capacity(files.len()),
            };

            for subdir in subdirs {
                let child = self.walk(subdir, ctx, runtime).await?;
                layout.subdirs.push(child);
            }

            for file in files {
                self.analyzer.analyze(&file, ctx, runtime).await?;
                layout.files.push(file);
            }

            Ok(layout)
        })
    }
}

/// Fail on module targets that were never analysed and do not exist.
///
/// Specifiers with an explicit module extension skip probing, so a missing
/// file only shows up when it is read. The walker reads just the files it
/// lists, which leaves targets outside the walk (or absent) to this check.
fn check_unread_targets(ctx: &BuildContext, runtime: &dyn Runtime) -> Result<()> {
    for link in &ctx.pending {
        if ctx.is_registered(&link.to)
            || !is_module_file(link.to.path())
            || runtime.exists(link.to.path())
        {
            continue;
        }

        let specifier = ctx
            .registry
            .get(&link.from)
            .and_then(|leaf| leaf.import_of(&link.to))
            .map(|record| record.relative_specifier().to_string())
            .unwrap_or_else(|| link.to.to_string());
        return Err(GraphError::ModuleNotFound {
            path: link.to.path().to_path_buf(),
            specifier,
            importer: link.from.path().to_path_buf(),
        });
    }
    Ok(())
}

/// Turn a linked layout into the public tree: directories first, then files.
fn materialize(layout: DirLayout, modules: &IndexMap<ModuleId, Arc<LeafNode>>) -> TreeNode {
    let mut children = Vec::with_capacity(layout.subdirs.len() + layout.files.len());
    children.extend(
        layout
            .subdirs
            .into_iter()
            .map(|dir| Node::Directory(materialize(dir, modules))),
    );
    children.extend(
        layout
            .files
            .iter()
            .filter_map(|id| modules.get(id).cloned())
            .map(Node::File),
    );

    TreeNode {
        path: layout.path,
        children,
    }
}
