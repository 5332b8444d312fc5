//! Recursive catalog construction from the host's media tree.

use std::collections::HashSet;

use crate::models::{Folder, Timeline};

use super::types::{Catalog, CatalogNode, NodeId, NodeKind};

/// Label of the fixed top-level anchor node.
pub const ROOT_LABEL: &str = "Master";

/// Build the pruned catalog for one project snapshot.
///
/// Walks `media_root` depth-first. At every level, subfolders come first,
/// sorted ascending by name; a subfolder is dropped entirely if no
/// descendant timeline survives under it. The folder's own timeline leaves
/// follow, matched against `timelines` by name and sorted ascending. The
/// root is always attached, even when the project has no timelines.
///
/// Matching is by name only. If two timelines share a name, the first in
/// project-index order wins; this is a documented limitation of name-based
/// association, not an error.
pub fn build_catalog(media_root: &Folder, timelines: &[Timeline]) -> Catalog {
    let mut nodes = vec![CatalogNode {
        id: NodeId(0),
        kind: NodeKind::Root,
        name: ROOT_LABEL.to_string(),
        children: Vec::new(),
        expanded: true,
    }];

    let children = attach_folder(&mut nodes, media_root, timelines);
    nodes[0].children = children;

    tracing::debug!(
        nodes = nodes.len(),
        timelines = timelines.len(),
        "catalog built"
    );
    Catalog::new(nodes, NodeId(0))
}

/// Attach `folder`'s surviving children to the arena, returning their ids.
///
/// Nodes for empty subtrees are reclaimed before anything else is allocated,
/// so the arena never holds a pruned node and ids stay contiguous in
/// depth-first order.
fn attach_folder(
    nodes: &mut Vec<CatalogNode>,
    folder: &Folder,
    timelines: &[Timeline],
) -> Vec<NodeId> {
    let mut children = Vec::new();

    let mut subfolders: Vec<&Folder> = folder.subfolders.iter().collect();
    subfolders.sort_by(|a, b| a.name.cmp(&b.name));

    for subfolder in subfolders {
        let id = NodeId(nodes.len());
        nodes.push(CatalogNode {
            id,
            kind: NodeKind::Folder,
            name: subfolder.name.clone(),
            children: Vec::new(),
            expanded: true,
        });

        let subtree = attach_folder(nodes, subfolder, timelines);
        if subtree.is_empty() {
            nodes.truncate(id.0);
        } else {
            nodes[id.0].children = subtree;
            children.push(id);
        }
    }

    // Names of timeline references directly in this folder.
    let referenced: HashSet<&str> = folder
        .clips
        .iter()
        .filter(|clip| clip.kind.is_timeline())
        .map(|clip| clip.name.as_str())
        .collect();

    // Match against the flat project list; duplicates keep the first.
    let mut taken: HashSet<&str> = HashSet::new();
    let mut matched: Vec<&Timeline> = timelines
        .iter()
        .filter(|timeline| {
            referenced.contains(timeline.name.as_str()) && taken.insert(timeline.name.as_str())
        })
        .collect();
    matched.sort_by(|a, b| a.name.cmp(&b.name));

    for timeline in matched {
        let id = NodeId(nodes.len());
        nodes.push(CatalogNode {
            id,
            kind: NodeKind::Timeline,
            name: timeline.name.clone(),
            children: Vec::new(),
            expanded: false,
        });
        children.push(id);
    }

    children
}
