use super::Coordinate;

/// Identifier of a node inside one `DepTree` arena.
///
/// Ids are assigned from a counter that starts at zero for every parse or
/// merge, so re-processing the same input reproduces the same ids. A
/// `NodeId` is only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Change classification of a node in a merged tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Present in the new tree only
    Added,
    /// Present in the old tree only
    Removed,
    /// Present in both trees with a different declared or resolved version
    Changed,
    /// Present in both trees with identical versions
    Unchanged,
}

impl ChangeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeStatus::Added => "added",
            ChangeStatus::Removed => "removed",
            ChangeStatus::Changed => "changed",
            ChangeStatus::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dependency occurrence in a tree.
///
/// The same coordinate may occur many times in one report; every occurrence
/// is its own node. Structural fields (id, parent, depth, children) are
/// assigned by the owning `DepTree` when the node is inserted; version
/// fields are fixed at construction. `status` and the `prev_*` versions are
/// only populated on nodes of merged trees.
#[derive(Debug, Clone)]
pub struct DepNode {
    id: NodeId,
    coordinate: Coordinate,
    declared_version: String,
    resolved_version: String,
    prev_declared_version: Option<String>,
    prev_resolved_version: Option<String>,
    status: Option<ChangeStatus>,
    depth: usize,
    descendant_count: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DepNode {
    pub fn new(
        coordinate: Coordinate,
        declared_version: impl Into<String>,
        resolved_version: impl Into<String>,
    ) -> Self {
        Self {
            id: NodeId::new(0),
            coordinate,
            declared_version: declared_version.into(),
            resolved_version: resolved_version.into(),
            prev_declared_version: None,
            prev_resolved_version: None,
            status: None,
            depth: 0,
            descendant_count: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_previous_versions(
        mut self,
        prev_declared: impl Into<String>,
        prev_resolved: impl Into<String>,
    ) -> Self {
        self.prev_declared_version = Some(prev_declared.into());
        self.prev_resolved_version = Some(prev_resolved.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn declared_version(&self) -> &str {
        &self.declared_version
    }

    pub fn resolved_version(&self) -> &str {
        &self.resolved_version
    }

    pub fn prev_declared_version(&self) -> Option<&str> {
        self.prev_declared_version.as_deref()
    }

    pub fn prev_resolved_version(&self) -> Option<&str> {
        self.prev_resolved_version.as_deref()
    }

    pub fn status(&self) -> Option<ChangeStatus> {
        self.status
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn descendant_count(&self) -> usize {
        self.descendant_count
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.coordinate.is_root()
    }

    /// True when this node's declared version was overridden by Gradle's
    /// conflict resolution: both versions present and different.
    pub fn is_forced_update(&self) -> bool {
        !self.declared_version.is_empty()
            && !self.resolved_version.is_empty()
            && self.declared_version != self.resolved_version
    }

    pub(crate) fn attach(&mut self, id: NodeId, parent: Option<NodeId>, depth: usize) {
        self.id = id;
        self.parent = parent;
        self.depth = depth;
    }

    pub(crate) fn push_child_id(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn set_descendant_count(&mut self, count: usize) {
        self.descendant_count = count;
    }

    pub(crate) fn set_status(&mut self, status: Option<ChangeStatus>) {
        self.status = status;
    }

    pub(crate) fn set_previous_versions(
        &mut self,
        prev_declared: Option<String>,
        prev_resolved: Option<String>,
    ) {
        self.prev_declared_version = prev_declared;
        self.prev_resolved_version = prev_resolved;
    }
}
