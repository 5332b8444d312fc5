//! Selection normalization and resolution to timelines.

use std::collections::BTreeSet;

use crate::models::Timeline;

use super::types::{Catalog, NodeId};

impl Catalog {
    /// Normalize a raw tree selection to timeline leaves.
    ///
    /// Folder (and root) nodes in the raw set are replaced by their DIRECT
    /// timeline children; nested subfolders are not descended into. Leaves
    /// pass through unchanged, and ids that don't belong to this build are
    /// dropped. Idempotent: normalizing a normalized set is a no-op.
    pub fn normalize_selection(&self, raw: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
        let mut normalized = BTreeSet::new();
        for &id in raw {
            let Some(node) = self.node(id) else {
                tracing::warn!(id = id.0, "selection references unknown node, ignoring");
                continue;
            };
            if node.is_timeline() {
                normalized.insert(id);
            } else {
                for &child in &node.children {
                    if self.node(child).is_some_and(|c| c.is_timeline()) {
                        normalized.insert(child);
                    }
                }
            }
        }
        normalized
    }

    /// Resolve selected leaves to timelines from the flat project list.
    ///
    /// Iterates the selection in ascending id (build) order and matches each
    /// leaf by exact name; duplicate names resolve to the first timeline in
    /// project-index order. Non-leaf ids are skipped; a leaf whose name no
    /// longer exists in the list resolves to nothing.
    pub fn resolve_timelines<'a>(
        &self,
        selection: &BTreeSet<NodeId>,
        timelines: &'a [Timeline],
    ) -> Vec<&'a Timeline> {
        selection
            .iter()
            .filter_map(|&id| self.node(id))
            .filter(|node| node.is_timeline())
            .filter_map(|node| timelines.iter().find(|timeline| timeline.name == node.name))
            .collect()
    }
}
