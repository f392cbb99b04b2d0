use std::path::PathBuf;

use crate::runtime::RuntimeError;

/// Fatal conditions raised while building a graph.
///
/// None of these are recovered from: the first one aborts the whole build and
/// no partial graph is returned.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A relative specifier matched no file after every probe.
    #[error("module not found: '{specifier}' imported from '{importer}' (tried '{path}')")]
    ModuleNotFound {
        path: PathBuf,
        specifier: String,
        importer: PathBuf,
    },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    #[error("file too large: {path} is {size} bytes (max: {max} bytes)")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl GraphError {
    /// Path the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ModuleNotFound { path, .. }
            | Self::NotADirectory { path }
            | Self::Parse { path, .. }
            | Self::ReadFile { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::InvalidUtf8 { path } => Some(path),
            Self::Runtime(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
