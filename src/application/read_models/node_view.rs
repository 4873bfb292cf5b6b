//! Node view structs for the diff read model
//!
//! These structs provide a nested, presentation-ready view of the merged
//! dependency tree with paths and change flags precomputed.

use crate::tree_diff::domain::ChangeStatus;

/// Change status of a node as presented to formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    Added,
    Removed,
    Changed,
    Unchanged,
}

impl StatusView {
    /// Lowercase label used by the text and JSON outputs
    pub fn as_str(self) -> &'static str {
        match self {
            StatusView::Added => "added",
            StatusView::Removed => "removed",
            StatusView::Changed => "changed",
            StatusView::Unchanged => "unchanged",
        }
    }
}

impl From<ChangeStatus> for StatusView {
    fn from(status: ChangeStatus) -> Self {
        match status {
            ChangeStatus::Added => StatusView::Added,
            ChangeStatus::Removed => StatusView::Removed,
            ChangeStatus::Changed => StatusView::Changed,
            ChangeStatus::Unchanged => StatusView::Unchanged,
        }
    }
}

/// View representation of a single dependency node
#[derive(Debug, Clone)]
pub struct NodeView {
    /// Coordinate in `group:artifact` form (or `project:<name>`)
    pub coordinate: String,
    /// Version as written in the build script
    pub declared_version: String,
    /// Version Gradle actually selected
    pub resolved_version: String,
    /// Declared version from the old report, when a diff was computed
    pub prev_declared_version: Option<String>,
    /// Resolved version from the old report, when a diff was computed
    pub prev_resolved_version: Option<String>,
    /// Change status, present only when two reports were compared
    pub status: Option<StatusView>,
    /// Depth below the synthetic root
    pub depth: usize,
    /// Number of transitive dependencies below this node
    pub descendant_count: usize,
    /// Human-readable dependency path from the first root-level ancestor
    pub path: String,
    /// Whether the resolved version differs from the declared one
    pub forced: bool,
    /// Child views, pruned according to the view options
    pub children: Vec<NodeView>,
}

/// Aggregate change counts over all non-root nodes of the merged tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl ChangeSummary {
    /// Total number of nodes whose status is not `unchanged`
    pub fn changed_total(&self) -> usize {
        self.added + self.removed + self.changed
    }
}
