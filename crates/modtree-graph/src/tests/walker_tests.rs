use std::path::Path;
use tempfile::TempDir;

use super::test_helpers::{builder_for, create_test_project, module_id};
use crate::{BindingKind, ExportKind, GraphError, Node};

fn child_names(children: &[Node]) -> Vec<String> {
    children
        .iter()
        .map(|child| {
            let path: &Path = match child {
                Node::Directory(dir) => &dir.path,
                Node::File(leaf) => leaf.id.path(),
            };
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect()
}

#[tokio::test]
async fn test_directories_precede_files() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("a.ts", "export const a = 1;"),
            ("zeta/z.ts", "export const z = 1;"),
            ("beta/b.ts", "export const b = 1;"),
        ],
    );

    let tree = builder_for(&root).walk_directory(&root).await.unwrap();

    assert_eq!(child_names(&tree.root.children), vec!["beta", "zeta", "a.ts"]);
    assert!(matches!(tree.root.children[0], Node::Directory(_)));
    assert!(matches!(tree.root.children[2], Node::File(_)));
    assert_eq!(tree.root.file_count(), 3);
    assert_eq!(tree.root.directories().count(), 2);
}

#[tokio::test]
async fn test_forward_references_are_linked_after_walk() {
    let temp = TempDir::new().unwrap();
    // Directories are walked first, so lib/b.ts is analysed before a.ts exists
    // in the registry.
    let root = create_test_project(
        &temp,
        &[
            ("a.ts", "import { b } from './lib/b';\nexport const a = b;"),
            ("lib/b.ts", "import { a } from '../a';\nexport const b = 2;"),
            ("lib/c.ts", "import { b } from './b';"),
        ],
    );
    let a = module_id(&root, "a.ts");
    let b = module_id(&root, "lib/b.ts");
    let c = module_id(&root, "lib/c.ts");

    let tree = builder_for(&root).walk_directory(&root).await.unwrap();

    let b_leaf = tree.module(&b).unwrap();
    let to_a = b_leaf.import_of(&a).unwrap();
    assert_eq!(to_a.resolved_node.as_ref(), Some(&a));
    assert!(to_a.mutual_reference);

    let a_leaf = tree.module(&a).unwrap();
    assert!(a_leaf.import_of(&b).unwrap().mutual_reference);

    let c_to_b = tree.module(&c).unwrap().import_of(&b).unwrap();
    assert_eq!(c_to_b.resolved_node.as_ref(), Some(&b));
    assert!(!c_to_b.mutual_reference);

    // The leaves in the tree are the same nodes as in the module map.
    let lib = tree.root.directories().next().unwrap();
    let tree_b = lib.files().find(|leaf| leaf.id == b).unwrap();
    assert!(std::sync::Arc::ptr_eq(tree_b, b_leaf));
}

#[tokio::test]
async fn test_vendor_and_non_module_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("index.ts", "import './theme.css';\nimport React from 'react';"),
            ("theme.css", "body {}"),
            ("README.md", "# readme"),
            ("node_modules/react/index.js", "export default {};"),
        ],
    );
    let index = module_id(&root, "index.ts");
    let css = module_id(&root, "theme.css");

    let tree = builder_for(&root).walk_directory(&root).await.unwrap();

    assert_eq!(child_names(&tree.root.children), vec!["index.ts"]);
    assert_eq!(tree.modules.len(), 1);

    // The stylesheet is an edge but never a node.
    let record = tree.module(&index).unwrap().import_of(&css).unwrap();
    assert!(record.bindings.is_empty());
    assert!(!record.is_linked());
}

#[tokio::test]
async fn test_file_path_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[("index.ts", "")]);

    let err = builder_for(&root)
        .walk_directory(root.join("index.ts"))
        .await
        .unwrap_err();

    match err {
        GraphError::NotADirectory { path } => assert_eq!(path, root.join("index.ts")),
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_module_aborts_walk() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("ok.ts", "export const ok = true;"),
            ("sub/broken.ts", "import { gone } from '../missing';"),
        ],
    );

    let err = builder_for(&root).walk_directory(&root).await.unwrap_err();

    match err {
        GraphError::ModuleNotFound {
            path,
            specifier,
            importer,
        } => {
            assert_eq!(path, root.join("missing"));
            assert_eq!(specifier, "../missing");
            assert_eq!(importer, root.join("sub/broken.ts"));
        }
        other => panic!("expected ModuleNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_module_with_explicit_extension_aborts_walk() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[("a.ts", "import { x } from './gone.ts';")]);

    let err = builder_for(&root).walk_directory(&root).await.unwrap_err();

    match err {
        GraphError::ModuleNotFound {
            path,
            specifier,
            importer,
        } => {
            assert_eq!(path, root.join("gone.ts"));
            assert_eq!(specifier, "./gone.ts");
            assert_eq!(importer, root.join("a.ts"));
        }
        other => panic!("expected ModuleNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_existing_target_outside_walked_dir_stays_unlinked() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("app/main.ts", "import { s } from '../shared/s.ts';"),
            ("shared/s.ts", "export const s = 1;"),
        ],
    );

    let tree = builder_for(&root)
        .walk_directory(root.join("app"))
        .await
        .unwrap();

    let main = tree.module(&module_id(&root, "app/main.ts")).unwrap();
    let record = main.import_of(&module_id(&root, "shared/s.ts")).unwrap();
    assert!(!record.is_linked());
    assert_eq!(tree.modules.len(), 1);
}

#[tokio::test]
async fn test_dotted_directory_names_are_walked() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("v1.2/index.ts", "export const version = '1.2';"),
            ("main.ts", "import { version } from './v1.2';"),
        ],
    );

    let tree = builder_for(&root).walk_directory(&root).await.unwrap();
    assert_eq!(child_names(&tree.root.children), vec!["v1.2", "main.ts"]);

    // Walking the dotted directory itself is also accepted.
    let nested = builder_for(&root)
        .walk_directory(root.join("v1.2"))
        .await
        .unwrap();
    assert_eq!(nested.root.file_count(), 1);

    let main = tree.module(&module_id(&root, "main.ts")).unwrap();
    let record = main.import_of(&module_id(&root, "v1.2/index.ts")).unwrap();
    assert!(record.is_linked());
}

#[tokio::test]
async fn test_parse_error_propagates() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[("bad.tsx", "export const x = <div>;")]);

    let err = builder_for(&root).walk_directory(&root).await.unwrap_err();
    assert!(matches!(err, GraphError::Parse { .. }));
    assert_eq!(err.path(), Some(root.join("bad.tsx").as_path()));
}

#[tokio::test]
async fn test_walk_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("app.tsx", "import Button, * as ui from './ui';\nexport default function App() {}"),
            ("ui/index.ts", "import { app } from '../app';\nexport * from './button';"),
            ("ui/button.jsx", "export default function Button() {}"),
        ],
    );
    let builder = builder_for(&root);

    let first = builder.walk_directory(&root).await.unwrap();
    let second = builder.walk_directory(&root).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.modules.keys().collect::<Vec<_>>(),
        second.modules.keys().collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_bindings_and_exports_survive_the_walk() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            (
                "main.ts",
                "import { x as y } from './dep';\nimport d from './dep';\nimport * as ns from './dep';",
            ),
            (
                "dep.ts",
                "export const x = 1;\nexport default x;\nexport * from './other';",
            ),
            ("other.ts", "export const o = 1;"),
        ],
    );
    let main = module_id(&root, "main.ts");
    let dep = module_id(&root, "dep.ts");

    let tree = builder_for(&root).walk_directory(&root).await.unwrap();

    let record = tree.module(&main).unwrap().import_of(&dep).unwrap();
    let kinds: Vec<_> = record.bindings.iter().map(|b| b.kind()).collect();
    assert_eq!(
        kinds,
        vec![BindingKind::Named, BindingKind::Default, BindingKind::Namespace]
    );

    let exports = &tree.module(&dep).unwrap().exports;
    let export_kinds: Vec<_> = exports.iter().map(|e| e.kind).collect();
    assert_eq!(
        export_kinds,
        vec![ExportKind::Named, ExportKind::Default, ExportKind::ReexportAll]
    );
    assert_eq!(exports[2].reexport_source.as_deref(), Some("./other"));
    // Re-exports do not create edges.
    assert!(tree.module(&dep).unwrap().imports.is_empty());
}

#[tokio::test]
async fn test_missing_path_with_extension_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[]);

    let err = builder_for(&root)
        .walk_directory(root.join("ghost.ts"))
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::NotADirectory { .. }));

    let err = builder_for(&root)
        .walk_directory(root.join("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::Runtime(_)));
}
