//! Filesystem abstraction used by every traversal.
//!
//! The graph builder never touches `std::fs` directly. It reads files, stats
//! paths and lists directories through the [`Runtime`] trait so that callers
//! can supply their own filesystem (an in-memory tree, a sandbox, a remote
//! store) and so tests can pin the working directory.

#[cfg(not(target_family = "wasm"))]
pub mod native;

#[cfg(all(test, not(target_family = "wasm")))]
pub mod test_utils;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

/// File metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// File size in bytes
    pub size: u64,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Whether this is a file
    pub is_file: bool,
}

/// Platform runtime trait.
///
/// Implementations provide POSIX-like semantics: `read_dir` lists entry names
/// (not full paths) of a single directory, `metadata` follows symlinks, and
/// `exists` never fails.
#[cfg(target_family = "wasm")]
#[async_trait(?Send)]
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file from the filesystem
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Get file metadata
    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a directory
    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;

    /// Get the current working directory
    fn get_cwd(&self) -> RuntimeResult<PathBuf>;
}

/// Platform runtime trait.
///
/// Implementations provide POSIX-like semantics: `read_dir` lists entry names
/// (not full paths) of a single directory, `metadata` follows symlinks, and
/// `exists` never fails.
#[cfg(not(target_family = "wasm"))]
#[async_trait]
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file from the filesystem
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Get file metadata
    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a directory
    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;

    /// Get the current working directory
    ///
    /// Relative roots handed to the graph builder are joined onto this path.
    fn get_cwd(&self) -> RuntimeResult<PathBuf>;
}
