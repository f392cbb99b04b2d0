//! # modtree-graph
//!
//! Static module-dependency graphs for ES-module style JavaScript and
//! TypeScript source trees.
//!
//! Every module file is parsed with OXC, its `import` declarations are
//! resolved to files on disk and its `export` declarations are recorded. No
//! code is executed and nothing is bundled.
//!
//! ## Build modes
//!
//! - **Directory walk** ([`GraphBuilder::walk_directory`]) mirrors a directory
//!   as a [`TreeNode`] whose children list sub-directories before files.
//! - **Reachability** ([`GraphBuilder::build_from_root`]) starts at one module
//!   and follows resolved imports, producing a flat [`ModuleGraph`].
//!
//! Both modes run in two phases. Traversal analyses files and records edges
//! in a per-build [`BuildContext`]; the link pass then points each
//! [`ImportRecord`] at its target and flags edges whose reverse edge also
//! exists. A module may therefore import a file that is analysed later.
//!
//! ## Resolution
//!
//! Relative specifiers are joined onto the importer's directory and probed
//! for a directory `index` file, then for each of `.tsx`, `.ts`, `.jsx`,
//! `.js`. Bare specifiers and anything under a vendor directory
//! (`node_modules` by default) are external and produce no edge.
//!
//! ## Errors
//!
//! Every [`GraphError`] is fatal: an unresolvable import, a parse failure or
//! an unreadable file aborts the build and no partial graph is returned.
//!
//! ```rust,no_run
//! use modtree_graph::{GraphBuilder, Node};
//!
//! # async fn example() -> modtree_graph::Result<()> {
//! let tree = GraphBuilder::new().walk_directory("src").await?;
//! for child in &tree.root.children {
//!     match child {
//!         Node::Directory(dir) => println!("{}/", dir.path.display()),
//!         Node::File(leaf) => println!("{}", leaf.id),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod analyzer;
mod assembler;
mod builder;
pub mod config;
mod context;
mod dialect;
mod error;
mod export;
mod import;
pub mod linker;
mod module_id;
mod node;
pub mod resolver;
pub mod runtime;
mod walker;

#[cfg(test)]
mod tests;

pub use analyzer::{FileAnalyzer, ImportStatement, ParsedModule, parse_module_structure};
pub use assembler::GraphAssembler;
pub use builder::GraphBuilder;
pub use config::{ConfigError, GraphConfig};
pub use context::{BuildContext, PendingLink};
pub use dialect::{DIALECTS, Dialect, PROBE_EXTENSIONS, is_module_file};
pub use error::{GraphError, Result};
pub use export::{ExportKind, ExportRecord};
pub use import::{Binding, BindingKind, ImportRecord};
pub use linker::{LinkStats, link_all};
pub use module_id::ModuleId;
pub use node::{DependencyTree, LeafNode, ModuleGraph, Node, TreeNode};
pub use resolver::{ModuleResolver, ResolveResult};
pub use runtime::{FileMetadata, Runtime, RuntimeError, RuntimeResult};
pub use walker::DirectoryWalker;

#[cfg(not(target_family = "wasm"))]
pub use runtime::native::NativeRuntime;

#[cfg(all(test, not(target_family = "wasm")))]
pub use runtime::test_utils::TestRuntime;
