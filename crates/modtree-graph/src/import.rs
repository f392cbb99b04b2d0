use serde::{Deserialize, Serialize};

use super::ModuleId;

/// Category of an import binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Named,
    Default,
    Namespace,
}

/// One specifier clause of an import statement.
///
/// `import def, { a as b } from './x'` yields `Default { local: "def" }`
/// followed by `Named { imported: "a", local: "b" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Binding {
    Named { imported: String, local: String },
    Default { local: String },
    Namespace { local: String },
}

impl Binding {
    pub fn kind(&self) -> BindingKind {
        match self {
            Self::Named { .. } => BindingKind::Named,
            Self::Default { .. } => BindingKind::Default,
            Self::Namespace { .. } => BindingKind::Namespace,
        }
    }

    /// Name the binding introduces in the importing module.
    pub fn local_name(&self) -> &str {
        match self {
            Self::Named { local, .. } | Self::Default { local } | Self::Namespace { local } => {
                local
            }
        }
    }

    /// Name exported by the target module. Only named bindings carry one.
    pub fn imported_name(&self) -> Option<&str> {
        match self {
            Self::Named { imported, .. } => Some(imported),
            _ => None,
        }
    }
}

/// Edge from one module to a resolved target file.
///
/// Several import statements naming the same file collapse into one record:
/// their bindings are appended in statement order and every distinct
/// specifier spelling is kept in `specifiers`, first-seen first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub specifiers: Vec<String>,
    /// Set by the linker when the target also imports this module.
    pub mutual_reference: bool,
    /// Set by the linker once the target is present in the registry.
    pub resolved_node: Option<ModuleId>,
    pub bindings: Vec<Binding>,
}

impl ImportRecord {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifiers: vec![specifier.into()],
            mutual_reference: false,
            resolved_node: None,
            bindings: Vec::new(),
        }
    }

    /// Specifier text of the first statement that produced this edge.
    pub fn relative_specifier(&self) -> &str {
        self.specifiers.first().map(String::as_str).unwrap_or_default()
    }

    /// Fold another statement targeting the same file into this record.
    pub fn merge_statement(&mut self, specifier: &str, bindings: Vec<Binding>) {
        if !self.specifiers.iter().any(|s| s == specifier) {
            self.specifiers.push(specifier.to_string());
        }
        self.bindings.extend(bindings);
    }

    pub fn is_linked(&self) -> bool {
        self.resolved_node.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_accessors() {
        let named = Binding::Named {
            imported: "a".into(),
            local: "b".into(),
        };
        assert_eq!(named.kind(), BindingKind::Named);
        assert_eq!(named.local_name(), "b");
        assert_eq!(named.imported_name(), Some("a"));

        let ns = Binding::Namespace { local: "ns".into() };
        assert_eq!(ns.kind(), BindingKind::Namespace);
        assert_eq!(ns.imported_name(), None);
    }

    #[test]
    fn test_merge_keeps_every_spelling_once() {
        let mut record = ImportRecord::new("./utils");
        record.merge_statement(
            "./utils/index",
            vec![Binding::Default { local: "u".into() }],
        );
        record.merge_statement(
            "./utils",
            vec![Binding::Namespace { local: "all".into() }],
        );

        assert_eq!(record.specifiers, vec!["./utils", "./utils/index"]);
        assert_eq!(record.relative_specifier(), "./utils");
        assert_eq!(record.bindings.len(), 2);
        assert!(!record.is_linked());
    }
}
