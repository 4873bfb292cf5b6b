//! Top-level read model for a dependency diff
//!
//! The read model is the single input every output formatter consumes.
//! It carries no domain types, only flattened view structs.

use super::forced_update_view::ForcedUpdateView;
use super::node_view::{ChangeSummary, NodeView};

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct MetadataView {
    /// RFC 3339 timestamp of when the diff was produced
    pub generated_at: String,
    /// Name of the generating tool
    pub tool_name: String,
    /// Version of the generating tool
    pub tool_version: String,
}

/// Read model consumed by all output formatters
#[derive(Debug, Clone)]
pub struct DiffReadModel {
    /// Report metadata
    pub metadata: MetadataView,
    /// Whether an old report was supplied and a diff computed
    pub diff_available: bool,
    /// Change counts, present only when the diff is available
    pub summary: Option<ChangeSummary>,
    /// Root of the merged tree view
    pub tree: NodeView,
    /// Forced updates detected in the merged tree, first occurrence first
    pub forced_updates: Vec<ForcedUpdateView>,
    /// Total number of tree nodes including the synthetic root
    pub node_count: usize,
    /// Number of distinct coordinates, root excluded
    pub distinct_coordinate_count: usize,
}
