//! Cross-reference linking.
//!
//! Runs after traversal, once every reachable leaf is in the registry. Each
//! pending link writes exactly one import record: it points the record at its
//! target when the target was registered, and flags the edge as mutual when
//! the reverse edge was also recorded. Links only read the registry keys and
//! the reference set, so running the pass again changes nothing.

use crate::context::BuildContext;

/// Counts reported by a link pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub linked: usize,
    pub unlinked: usize,
    pub mutual: usize,
}

/// Resolve every pending link in enqueue order.
pub fn link_all(ctx: &mut BuildContext) -> LinkStats {
    let mut stats = LinkStats::default();

    for link in &ctx.pending {
        let target_registered = ctx.registry.contains_key(&link.to);
        let mutual = ctx.references.contains(&(link.to.clone(), link.from.clone()));

        let Some(record) = ctx
            .registry
            .get_mut(&link.from)
            .and_then(|leaf| leaf.imports.get_mut(&link.to))
        else {
            tracing::warn!("No import record for {} -> {}", link.from, link.to);
            continue;
        };

        record.mutual_reference = mutual;
        record.resolved_node = target_registered.then(|| link.to.clone());

        if target_registered {
            stats.linked += 1;
        } else {
            stats.unlinked += 1;
        }
        if mutual {
            stats.mutual += 1;
        }
    }

    tracing::debug!(
        linked = stats.linked,
        unlinked = stats.unlinked,
        mutual = stats.mutual,
        "Linked import edges"
    );
    stats
}
