use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Dialect, ExportRecord, ImportRecord, ModuleId};

/// Per-file record of resolved imports and declared exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    pub id: ModuleId,
    pub dialect: Dialect,
    /// Keyed by resolved target, in order of first discovery.
    pub imports: IndexMap<ModuleId, ImportRecord>,
    pub exports: Vec<ExportRecord>,
}

impl LeafNode {
    pub fn new(id: ModuleId, dialect: Dialect) -> Self {
        Self {
            id,
            dialect,
            imports: IndexMap::new(),
            exports: Vec::new(),
        }
    }

    pub fn import_of(&self, target: &ModuleId) -> Option<&ImportRecord> {
        self.imports.get(target)
    }

    /// Targets this module imports and that import it back.
    pub fn mutual_references(&self) -> impl Iterator<Item = &ModuleId> {
        self.imports
            .iter()
            .filter(|(_, record)| record.mutual_reference)
            .map(|(target, _)| target)
    }
}

/// Directory record mirroring the on-disk layout.
///
/// `children` lists every sub-directory before any file, each group in
/// enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub path: PathBuf,
    pub children: Vec<Node>,
}

/// Entry of a [`TreeNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "node", rename_all = "lowercase")]
pub enum Node {
    Directory(TreeNode),
    File(Arc<LeafNode>),
}

impl TreeNode {
    pub fn directories(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &Arc<LeafNode>> {
        self.children.iter().filter_map(|child| match child {
            Node::File(leaf) => Some(leaf),
            Node::Directory(_) => None,
        })
    }

    /// Number of leaf nodes in this directory and every directory below it.
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Directory(dir) => dir.file_count(),
                Node::File(_) => 1,
            })
            .sum()
    }
}

/// Result of walking a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    pub root: TreeNode,
    /// Every analysed module, in analysis order.
    pub modules: IndexMap<ModuleId, Arc<LeafNode>>,
}

impl DependencyTree {
    pub fn module(&self, id: &ModuleId) -> Option<&Arc<LeafNode>> {
        self.modules.get(id)
    }
}

/// Result of a reachability build from one root module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleGraph {
    pub root: Arc<LeafNode>,
    /// Every reachable module, in visitation order (root first).
    pub modules: IndexMap<ModuleId, Arc<LeafNode>>,
}

impl ModuleGraph {
    pub fn module(&self, id: &ModuleId) -> Option<&Arc<LeafNode>> {
        self.modules.get(id)
    }

    /// Follow a linked edge to the node it points at.
    pub fn target_of(&self, record: &ImportRecord) -> Option<&Arc<LeafNode>> {
        record
            .resolved_node
            .as_ref()
            .and_then(|id| self.modules.get(id))
    }
}
