//! Extension and index-file probing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::dialect::PROBE_EXTENSIONS;
use crate::runtime::Runtime;

/// Index file stem probed inside directories.
pub const INDEX_FILE: &str = "index";

async fn is_file(path: &Path, runtime: &dyn Runtime) -> bool {
    if !runtime.exists(path) {
        return false;
    }
    matches!(runtime.metadata(path).await, Ok(metadata) if metadata.is_file)
}

/// Append `.ext` to the full path, keeping any dot already in the file name.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".");
    raw.push(ext);
    PathBuf::from(raw)
}

/// Probe `dir/index.<ext>` in priority order.
pub async fn try_index_files(dir: &Path, runtime: &dyn Runtime) -> Option<PathBuf> {
    for ext in PROBE_EXTENSIONS {
        let index = dir.join(format!("{INDEX_FILE}.{ext}"));
        tracing::trace!("Probing index file {}", index.display());
        if is_file(&index, runtime).await {
            return Some(index);
        }
    }
    None
}

/// Probe `candidate.<ext>` in priority order.
pub async fn try_extensions(candidate: &Path, runtime: &dyn Runtime) -> Option<PathBuf> {
    for ext in PROBE_EXTENSIONS {
        let with_ext = append_extension(candidate, ext);
        tracing::trace!("Probing {}", with_ext.display());
        if is_file(&with_ext, runtime).await {
            return Some(with_ext);
        }
    }
    None
}

/// True when the candidate exists as a regular file.
pub async fn try_as_is(candidate: &Path, runtime: &dyn Runtime) -> Option<PathBuf> {
    is_file(candidate, runtime)
        .await
        .then(|| candidate.to_path_buf())
}
