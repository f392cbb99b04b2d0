//! Import/export extraction from module source text.
//!
//! Only top-level module declarations are inspected. Nothing here touches the
//! filesystem or resolves specifiers; the caller decides what each import
//! source points at.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Declaration, ExportAllDeclaration, ExportDefaultDeclaration,
    ExportNamedDeclaration, Expression, ImportDeclaration, ImportDeclarationSpecifier,
    ModuleDeclaration, ModuleExportName,
};
use oxc_parser::Parser;
use oxc_span::GetSpan;

use crate::{Binding, Dialect, ExportRecord};

/// An import statement before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub source: String,
    pub bindings: Vec<Binding>,
}

/// Import statements and export records of one module, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedModule {
    pub imports: Vec<ImportStatement>,
    pub exports: Vec<ExportRecord>,
}

/// Parse `source` with the flags of `dialect` and collect its module
/// declarations.
///
/// Any parser diagnostic is fatal: the messages are joined and returned as
/// the error.
pub fn parse_module_structure(source: &str, dialect: Dialect) -> Result<ParsedModule, String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, dialect.source_type()).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(if message.is_empty() {
            "parser aborted".to_string()
        } else {
            message
        });
    }

    let mut parsed = ParsedModule::default();
    for stmt in &ret.program.body {
        let Some(module_decl) = stmt.as_module_declaration() else {
            continue;
        };
        match module_decl {
            ModuleDeclaration::ImportDeclaration(import) => {
                parsed.imports.push(collect_import(import));
            }
            ModuleDeclaration::ExportNamedDeclaration(named) => {
                collect_named_export(named, &mut parsed.exports);
            }
            ModuleDeclaration::ExportDefaultDeclaration(default) => {
                parsed.exports.push(collect_default_export(default, source));
            }
            ModuleDeclaration::ExportAllDeclaration(all) => {
                parsed.exports.push(collect_export_all(all));
            }
            _ => {}
        }
    }

    Ok(parsed)
}

fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

fn collect_import(import: &ImportDeclaration) -> ImportStatement {
    let bindings = import
        .specifiers
        .iter()
        .flatten()
        .map(|spec| match spec {
            ImportDeclarationSpecifier::ImportSpecifier(named) => Binding::Named {
                imported: export_name(&named.imported),
                local: named.local.name.to_string(),
            },
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => Binding::Default {
                local: default.local.name.to_string(),
            },
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns) => Binding::Namespace {
                local: ns.local.name.to_string(),
            },
        })
        .collect();

    ImportStatement {
        source: import.source.value.to_string(),
        bindings,
    }
}

fn collect_named_export(named: &ExportNamedDeclaration, exports: &mut Vec<ExportRecord>) {
    let source = named.source.as_ref().map(|src| src.value.to_string());

    for spec in &named.specifiers {
        let record = ExportRecord::named(export_name(&spec.exported), export_name(&spec.local));
        exports.push(match &source {
            Some(source) => record.from_source(source.clone()),
            None => record,
        });
    }

    let Some(decl) = &named.declaration else {
        return;
    };
    let mut push = |name: &str| exports.push(ExportRecord::named(name, name));
    match decl {
        Declaration::VariableDeclaration(var) => {
            for declarator in &var.declarations {
                if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                    push(&ident.name);
                }
            }
        }
        Declaration::FunctionDeclaration(func) => {
            if let Some(id) = &func.id {
                push(&id.name);
            }
        }
        Declaration::ClassDeclaration(class) => {
            if let Some(id) = &class.id {
                push(&id.name);
            }
        }
        Declaration::TSTypeAliasDeclaration(alias) => push(&alias.id.name),
        Declaration::TSInterfaceDeclaration(interface) => push(&interface.id.name),
        Declaration::TSEnumDeclaration(enum_decl) => push(&enum_decl.id.name),
        _ => {}
    }
}

/// The label is the assignment target for `export default a = b` (also when
/// parenthesised), otherwise the source text of the whole exported
/// declaration or expression.
fn collect_default_export(default: &ExportDefaultDeclaration, source: &str) -> ExportRecord {
    let assignment = default
        .declaration
        .as_expression()
        .map(Expression::without_parentheses);
    let span = match assignment {
        Some(Expression::AssignmentExpression(assign)) => assign.left.span(),
        _ => default.declaration.span(),
    };
    ExportRecord::default_export(span.source_text(source).trim())
}

fn collect_export_all(all: &ExportAllDeclaration) -> ExportRecord {
    let source = all.source.value.to_string();
    match &all.exported {
        Some(name) => ExportRecord::named(export_name(name), "*").from_source(source),
        None => ExportRecord::reexport_all(source),
    }
}
