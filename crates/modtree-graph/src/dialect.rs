//! Source dialects and the extension table that selects them.
//!
//! The table below is the single source of truth for which files are treated
//! as modules: the walker analyses exactly these extensions, the resolver
//! accepts them verbatim, and the analyzer derives parser flags from them.

use std::path::Path;

use oxc_span::SourceType as OxcSourceType;
use serde::{Deserialize, Serialize};

/// Grammar flavour of a module file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

/// Every recognised module extension and the dialect it selects.
pub const DIALECTS: &[(&str, Dialect)] = &[
    ("tsx", Dialect::Tsx),
    ("ts", Dialect::TypeScript),
    ("mts", Dialect::TypeScript),
    ("cts", Dialect::TypeScript),
    ("jsx", Dialect::Jsx),
    ("js", Dialect::JavaScript),
    ("mjs", Dialect::JavaScript),
    ("cjs", Dialect::JavaScript),
];

/// Extensions probed, in priority order, when a specifier omits one.
///
/// Changing this order changes which file wins when `foo.ts` and `foo.js`
/// sit side by side.
pub const PROBE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

impl Dialect {
    /// Look up the dialect for an extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        DIALECTS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
            .map(|(_, dialect)| *dialect)
    }

    /// Dialect of a path, or `None` when it is not a module file.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_typescript(self) -> bool {
        matches!(self, Self::TypeScript | Self::Tsx)
    }

    pub fn is_jsx(self) -> bool {
        matches!(self, Self::Jsx | Self::Tsx)
    }

    /// Parser flags for this dialect. Every dialect parses as an ES module.
    pub fn source_type(self) -> OxcSourceType {
        OxcSourceType::mjs()
            .with_typescript(self.is_typescript())
            .with_jsx(self.is_jsx())
    }
}

/// True when the path carries one of the [`DIALECTS`] extensions.
pub fn is_module_file(path: &Path) -> bool {
    Dialect::from_path(path).is_some()
}
