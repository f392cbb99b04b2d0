//! Build configuration.
//!
//! Sources are layered, later ones winning:
//! defaults < `modtree.toml` < `MODTREE_*` environment variables.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "modtree.toml";

/// Largest module file the analyzer will read (10MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directory names marking third-party code. A specifier resolving through
    /// one of these is external, and the walker does not descend into them.
    pub vendor_dirs: Vec<String>,

    /// Files larger than this many bytes are rejected.
    pub max_file_size: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vendor_dirs: vec!["node_modules".to_string()],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl GraphConfig {
    /// Load configuration from defaults, a TOML file and the environment.
    ///
    /// With `path = None` the file is `modtree.toml` in the process cwd and
    /// is skipped when absent. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(file) = file {
            tracing::debug!("Loading config from {}", file.display());
            figment = figment.merge(Toml::file(file));
        }
        figment = figment.merge(Env::prefixed("MODTREE_"));

        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn with_vendor_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendor_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// True when `name` is one of the configured vendor directory names.
    pub fn is_vendor_dir(&self, name: &str) -> bool {
        self.vendor_dirs.iter().any(|dir| dir == name)
    }
}
