//! Specifier resolution.
//!
//! Turns the source string of an import statement into the absolute path of
//! a project file, or reports it as external. The order of attempts is:
//!
//! 1. Bare specifiers (`react`, `@scope/pkg`) are external.
//! 2. The specifier is joined onto the importer's directory and normalised.
//! 3. Candidates passing through a vendor directory are external.
//! 4. A candidate that already has a module extension is returned as-is.
//!    Its existence is checked later, when the file is read.
//! 5. A directory is probed for `index.{tsx,ts,jsx,js}`.
//! 6. The candidate is probed with each extension appended.
//! 7. A candidate with any other extension that exists as a file (a
//!    stylesheet, a JSON document) is returned as-is.
//!
//! Anything left over is a [`GraphError::ModuleNotFound`].

mod algorithm;
mod extensions;

pub use algorithm::{candidate_path, is_relative, is_vendored};
pub use extensions::{INDEX_FILE, try_extensions, try_index_files};

use std::path::Path;

use crate::config::GraphConfig;
use crate::dialect::is_module_file;
use crate::error::{GraphError, Result};
use crate::runtime::Runtime;
use crate::ModuleId;

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// A project file.
    Local(ModuleId),
    /// Bare or vendored; skipped without recording an edge.
    External(String),
}

/// Resolves import specifiers against the filesystem.
#[derive(Debug, Clone)]
pub struct ModuleResolver {
    vendor_dirs: Vec<String>,
}

impl ModuleResolver {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            vendor_dirs: config.vendor_dirs.clone(),
        }
    }

    /// Resolve `specifier` as written in `importer`.
    pub async fn resolve(
        &self,
        importer: &Path,
        specifier: &str,
        runtime: &dyn Runtime,
    ) -> Result<ResolveResult> {
        if !is_relative(specifier) {
            tracing::trace!(specifier, "Bare specifier treated as external");
            return Ok(ResolveResult::External(specifier.to_string()));
        }

        let candidate = candidate_path(importer, specifier);

        if is_vendored(importer, &candidate, &self.vendor_dirs) {
            tracing::trace!(specifier, "Vendored specifier treated as external");
            return Ok(ResolveResult::External(specifier.to_string()));
        }

        if is_module_file(&candidate) {
            return Ok(ResolveResult::Local(ModuleId::new(candidate)));
        }

        if runtime.exists(&candidate) {
            if let Ok(metadata) = runtime.metadata(&candidate).await {
                if metadata.is_dir {
                    if let Some(index) = try_index_files(&candidate, runtime).await {
                        return Ok(ResolveResult::Local(ModuleId::new(index)));
                    }
                }
            }
        }

        if let Some(resolved) = try_extensions(&candidate, runtime).await {
            return Ok(ResolveResult::Local(ModuleId::new(resolved)));
        }

        if candidate.extension().is_some() {
            if let Some(asset) = extensions::try_as_is(&candidate, runtime).await {
                return Ok(ResolveResult::Local(ModuleId::new(asset)));
            }
        }

        Err(GraphError::ModuleNotFound {
            path: candidate,
            specifier: specifier.to_string(),
            importer: importer.to_path_buf(),
        })
    }
}
