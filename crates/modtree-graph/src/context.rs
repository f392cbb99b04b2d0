//! Shared state of one build.
//!
//! A `BuildContext` is created per build, threaded by `&mut` through every
//! traversal call and consumed when the result is assembled. During the
//! build phase the registry and reference set only grow and each key is
//! written once; during the link phase they are read-only.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::{LeafNode, ModuleId};

/// An import edge waiting for the link phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingLink {
    pub from: ModuleId,
    pub to: ModuleId,
}

#[derive(Debug, Default)]
pub struct BuildContext {
    /// One leaf per analysed file, in analysis order.
    pub registry: IndexMap<ModuleId, LeafNode>,
    /// Every `(from, to)` edge discovered so far.
    pub references: FxHashSet<(ModuleId, ModuleId)>,
    /// Edges to link once traversal has finished, in discovery order.
    pub pending: Vec<PendingLink>,
    /// Modules claimed by the reachability traversal.
    pub visited: FxHashSet<ModuleId>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, id: &ModuleId) -> bool {
        self.registry.contains_key(id)
    }

    /// Store a finished leaf. Returns `false` (and keeps the first one) if the
    /// path was already registered.
    pub fn register(&mut self, leaf: LeafNode) -> bool {
        if self.registry.contains_key(&leaf.id) {
            tracing::warn!("Module {} registered twice; keeping the first", leaf.id);
            return false;
        }
        self.registry.insert(leaf.id.clone(), leaf);
        true
    }

    /// Record that `from` imports `to` and queue the edge for linking.
    ///
    /// A second statement importing the same target does not queue a second
    /// link; the edge record is shared.
    pub fn record_edge(&mut self, from: &ModuleId, to: &ModuleId) {
        if self.references.insert((from.clone(), to.clone())) {
            self.pending.push(PendingLink {
                from: from.clone(),
                to: to.clone(),
            });
        }
    }

    pub fn has_edge(&self, from: &ModuleId, to: &ModuleId) -> bool {
        // Tuple keys need owned values for lookup.
        self.references.contains(&(from.clone(), to.clone()))
    }

    /// Claim a module for traversal. Returns `true` the first time only.
    pub fn mark_visited(&mut self, id: &ModuleId) -> bool {
        self.visited.insert(id.clone())
    }
}
