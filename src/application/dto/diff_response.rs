use crate::tree_diff::domain::{DepTree, ReportMetadata};
use crate::tree_diff::services::{ForcedUpdateScan, NodeIndex};

/// DiffResponse - Internal response DTO from the report diffing use case
///
/// This DTO contains the rich data structures produced by the use case,
/// which adapters can then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct DiffResponse {
    /// The result tree: the merged diff tree when an old report was given,
    /// otherwise the parsed new tree
    pub tree: DepTree,
    /// Whether an old report participated (statuses are present on nodes)
    pub diff_available: bool,
    /// Coordinate index over the result tree
    pub index: NodeIndex,
    /// Forced-update scan over the result tree
    pub scan: ForcedUpdateScan,
    /// Report metadata (timestamp, tool info)
    pub metadata: ReportMetadata,
}

impl DiffResponse {
    pub fn new(
        tree: DepTree,
        diff_available: bool,
        index: NodeIndex,
        scan: ForcedUpdateScan,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            tree,
            diff_available,
            index,
            scan,
            metadata,
        }
    }
}
