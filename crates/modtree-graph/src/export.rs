use serde::{Deserialize, Serialize};

/// Export declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Named,
    Default,
    /// `export * from './module'`
    ReexportAll,
}

/// One exported name of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub kind: ExportKind,
    /// Public name. `*` for re-export-all; for default exports a best-effort
    /// label taken from the source text, not a semantic identifier.
    pub exported_name: String,
    pub local_name: Option<String>,
    /// Raw specifier of a re-export, exactly as written.
    pub reexport_source: Option<String>,
}

impl ExportRecord {
    pub fn named(exported: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            kind: ExportKind::Named,
            exported_name: exported.into(),
            local_name: Some(local.into()),
            reexport_source: None,
        }
    }

    pub fn default_export(label: impl Into<String>) -> Self {
        Self {
            kind: ExportKind::Default,
            exported_name: label.into(),
            local_name: None,
            reexport_source: None,
        }
    }

    pub fn reexport_all(source: impl Into<String>) -> Self {
        Self {
            kind: ExportKind::ReexportAll,
            exported_name: "*".to_string(),
            local_name: None,
            reexport_source: Some(source.into()),
        }
    }

    /// Attach the module a named export is forwarded from.
    pub fn from_source(mut self, source: impl Into<String>) -> Self {
        self.reexport_source = Some(source.into());
        self
    }

    pub fn is_default(&self) -> bool {
        matches!(self.kind, ExportKind::Default)
    }

    pub fn is_reexport(&self) -> bool {
        self.reexport_source.is_some()
    }
}
