use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Identity of a module: its absolute, lexically normalised file path.
///
/// Normalisation removes `.` and `..` components without touching the
/// filesystem, so two specifiers that spell the same file differently
/// (`./a/../b.ts` and `./b.ts`) produce equal ids. Symlinks are not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    /// Build an id from a path that is already absolute.
    ///
    /// Relative paths are accepted but joined onto nothing, so callers should
    /// go through [`ModuleId::from_relative`] when a base directory is known.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().clean())
    }

    /// Build an id by joining `path` onto `base` (unless `path` is absolute).
    pub fn from_relative(base: &Path, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.is_absolute() {
            Self::new(path)
        } else {
            Self::new(base.join(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.0
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ModuleId {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ModuleId {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
