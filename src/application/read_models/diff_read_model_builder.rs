//! Builder for constructing DiffReadModel from domain objects
//!
//! This module provides the builder that transforms the use case response
//! into the query-optimized read model consumed by the formatters.

use super::diff_read_model::{DiffReadModel, MetadataView};
use super::forced_update_view::ForcedUpdateView;
use super::node_view::{ChangeSummary, NodeView, StatusView};
use crate::application::dto::DiffResponse;
use crate::tree_diff::domain::{ChangeStatus, DepTree, NodeId, ReportMetadata};
use crate::tree_diff::services::{ForcedUpdateScan, PathResolver, SubtreeMatcher};

/// Options controlling which subtrees the built tree view retains
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Case-insensitive substring applied to whole subtrees
    pub filter: Option<String>,
    /// Drop subtrees without any added, removed or changed node
    pub changes_only: bool,
}

/// Builder that turns a use case response into the formatter-facing read model
///
/// Filtering never removes the root: a subtree is retained when it contains
/// a filter match and, under `changes_only`, at least one non-unchanged node.
pub struct DiffReadModelBuilder;

impl DiffReadModelBuilder {
    /// Builds a DiffReadModel from a use case response
    ///
    /// # Arguments
    /// * `response` - Merged tree plus coordinate index, forced update scan and metadata
    /// * `options` - Filter and changes-only settings from the command line
    ///
    /// # Returns
    /// A fully constructed DiffReadModel
    pub fn build(response: &DiffResponse, options: &ViewOptions) -> DiffReadModel {
        let summary = response
            .diff_available
            .then(|| Self::build_summary(&response.tree));

        DiffReadModel {
            metadata: Self::build_metadata(&response.metadata),
            diff_available: response.diff_available,
            summary,
            tree: Self::build_tree(&response.tree, options, response.diff_available),
            forced_updates: Self::build_forced_updates(&response.scan),
            node_count: response.tree.node_count(),
            distinct_coordinate_count: response.index.distinct_coordinate_count(),
        }
    }

    /// Converts domain metadata to its view representation
    fn build_metadata(metadata: &ReportMetadata) -> MetadataView {
        MetadataView {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    /// Counts node statuses across the merged tree, root excluded
    fn build_summary(tree: &DepTree) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for id in tree.iter_preorder() {
            let node = tree.node(id);
            if node.is_root() {
                continue;
            }
            match node.status() {
                Some(ChangeStatus::Added) => summary.added += 1,
                Some(ChangeStatus::Removed) => summary.removed += 1,
                Some(ChangeStatus::Changed) => summary.changed += 1,
                Some(ChangeStatus::Unchanged) | None => summary.unchanged += 1,
            }
        }
        summary
    }

    /// Converts the arena tree into nested views
    ///
    /// Nodes are visited in reverse index order, so every child view exists
    /// before its parent is assembled. Per-subtree match and change flags are
    /// aggregated in the same pass. `changes_only` is ignored when no old
    /// report was supplied, since no node carries a status then.
    fn build_tree(tree: &DepTree, options: &ViewOptions, diff_available: bool) -> NodeView {
        let matcher = SubtreeMatcher::new(options.filter.as_deref().unwrap_or(""));
        let changes_only = options.changes_only && diff_available;
        let node_count = tree.node_count();

        let mut views: Vec<Option<NodeView>> = Vec::with_capacity(node_count);
        views.resize_with(node_count, || None);
        let mut subtree_matches = vec![false; node_count];
        let mut subtree_changed = vec![false; node_count];

        for index in (0..node_count).rev() {
            let id = NodeId::new(index);
            let node = tree.node(id);
            let mut matches = matcher.matches_node(tree, id);
            let mut changed = node
                .status()
                .is_some_and(|status| status != ChangeStatus::Unchanged);

            let mut children = Vec::new();
            for &child in tree.children(id) {
                matches |= subtree_matches[child.index()];
                changed |= subtree_changed[child.index()];
                let retain = subtree_matches[child.index()]
                    && (!changes_only || subtree_changed[child.index()]);
                if retain {
                    if let Some(view) = views[child.index()].take() {
                        children.push(view);
                    }
                }
            }

            subtree_matches[index] = matches;
            subtree_changed[index] = changed;
            views[index] = Some(Self::build_node_view(tree, id, children));
        }

        views[tree.root().index()]
            .take()
            .expect("the root view is assembled in the final iteration")
    }

    /// Builds the view for a single node from its domain data
    fn build_node_view(tree: &DepTree, id: NodeId, children: Vec<NodeView>) -> NodeView {
        let node = tree.node(id);
        NodeView {
            coordinate: node.coordinate().as_str().to_string(),
            declared_version: node.declared_version().to_string(),
            resolved_version: node.resolved_version().to_string(),
            prev_declared_version: node.prev_declared_version().map(str::to_string),
            prev_resolved_version: node.prev_resolved_version().map(str::to_string),
            status: node.status().map(StatusView::from),
            depth: node.depth(),
            descendant_count: node.descendant_count(),
            path: PathResolver::render_node(tree, id),
            forced: node.is_forced_update(),
            children,
        }
    }

    /// Converts the scan result into forced update views, first occurrence first
    fn build_forced_updates(scan: &ForcedUpdateScan) -> Vec<ForcedUpdateView> {
        scan.forced_updates()
            .iter()
            .map(|(coordinate, info)| ForcedUpdateView {
                coordinate: coordinate.as_str().to_string(),
                resolved: info.resolved().to_string(),
                declared_variants: info.declared_variants().iter().cloned().collect(),
                occurrence_count: info.occurrence_count(),
                paths: info.paths().iter().cloned().collect(),
            })
            .collect()
    }
}
