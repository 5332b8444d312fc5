//! Catalog tree types.

/// Identifier of a node within one built catalog.
///
/// Ids are assigned in depth-first build order, so ascending `NodeId` order
/// is the deterministic iteration order used everywhere a selection is
/// resolved. Ids are only meaningful for the catalog that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// What a catalog node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The fixed top-level anchor; always present, never a render target.
    Root,
    /// A media pool folder with at least one descendant timeline.
    Folder,
    /// A timeline leaf; the only selectable render target.
    Timeline,
}

/// One node of the presented catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Folder or timeline name as reported by the host; the root carries the
    /// fixed anchor label.
    pub name: String,
    /// Child node ids: folders first, then timeline leaves, each group
    /// sorted ascending by name.
    pub children: Vec<NodeId>,
    /// Attached folders are shown expanded.
    pub expanded: bool,
}

impl CatalogNode {
    /// Whether this node is a timeline leaf.
    pub fn is_timeline(&self) -> bool {
        self.kind == NodeKind::Timeline
    }

    /// Label to display for this node. Folders are bracketed to tell them
    /// apart from timelines; the root keeps its anchor label as-is.
    pub fn display_label(&self) -> String {
        match self.kind {
            NodeKind::Folder => format!("[{}]", self.name),
            NodeKind::Root | NodeKind::Timeline => self.name.clone(),
        }
    }
}

/// A built catalog: the pruned tree plus its node arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    nodes: Vec<CatalogNode>,
    root: NodeId,
}

impl Catalog {
    pub(crate) fn new(nodes: Vec<CatalogNode>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The fixed root node.
    pub fn root(&self) -> &CatalogNode {
        &self.nodes[self.root.0]
    }

    /// Node by id, if it belongs to this build.
    pub fn node(&self, id: NodeId) -> Option<&CatalogNode> {
        self.nodes.get(id.0)
    }

    /// Whether the catalog contains no timelines at all (root-only tree).
    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in id (build) order.
    pub fn nodes(&self) -> impl Iterator<Item = &CatalogNode> {
        self.nodes.iter()
    }
}
