use crate::application::dto::{DiffRequest, DiffResponse};
use crate::ports::inbound::TreeDiffPort;
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::security::{validate_readable_report, MAX_REPORT_SIZE};
use crate::shared::Result;
use crate::tree_diff::domain::{DepTree, ReportMetadata};
use crate::tree_diff::services::{
    CoordinateFilter, DiffEngine, ForcedUpdateScan, ForcedUpdateScanner, NodeIndex, NodeIndexer,
    ReportParser,
};
use std::path::Path;

/// DiffReportsUseCase - Core use case for comparing dependency reports
///
/// This use case orchestrates the whole diff workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DiffReportsUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
    parser: ReportParser,
}

impl<RR, PR> DiffReportsUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new DiffReportsUseCase with injected dependencies
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
            parser: ReportParser::new(),
        }
    }

    /// Executes the diff use case
    ///
    /// # Arguments
    /// * `request` - Diff request containing report paths and exclusion patterns
    ///
    /// # Returns
    /// DiffResponse containing the result tree, coordinate index, forced
    /// update scan and metadata
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        // Step 1: Read the report files
        let (new_text, old_text) = self.read_reports(&request)?;

        // Step 2: Parse the reports into dependency trees
        let (new_tree, old_tree) = self.parse_reports(&new_text, old_text.as_deref());

        // Step 3: Apply coordinate exclusions
        let (new_tree, old_tree) = self.apply_exclusion_filters(new_tree, old_tree, &request)?;

        // Step 4: Merge the trees when an old report is present
        let (tree, diff_available) = Self::merge_trees(new_tree, old_tree);

        // Step 5: Index coordinates and scan for forced updates
        let (index, scan) = self.index_and_scan(&tree);

        // Step 6: Stamp metadata and build the response
        Ok(self.build_response(tree, diff_available, index, scan))
    }

    /// Reads the new and, when present, the old report file
    ///
    /// # Arguments
    /// * `request` - The diff request containing report paths
    ///
    /// # Returns
    /// Tuple of (new report text, optional old report text)
    fn read_reports(&self, request: &DiffRequest) -> Result<(String, Option<String>)> {
        let total = 1 + usize::from(request.old_report_path.is_some());

        self.progress_reporter.report(&format!(
            "📖 Loading dependency report from: {}",
            request.new_report_path.display()
        ));
        let new_text = self.report_reader.read_report(&request.new_report_path)?;
        self.progress_reporter
            .report_progress(1, total, Some("report file(s) read"));

        let old_text = match &request.old_report_path {
            Some(path) => {
                self.progress_reporter.report(&format!(
                    "📖 Loading previous report from: {}",
                    path.display()
                ));
                let text = self.report_reader.read_report(path)?;
                self.progress_reporter
                    .report_progress(2, total, Some("report file(s) read"));
                Some(text)
            }
            None => None,
        };

        Ok((new_text, old_text))
    }

    /// Parses the report texts, reporting node counts
    ///
    /// Malformed lines never fail the parse; they are skipped or folded into
    /// fallback nodes, so this step is infallible.
    fn parse_reports(
        &self,
        new_text: &str,
        old_text: Option<&str>,
    ) -> (DepTree, Option<DepTree>) {
        let new_tree = self.parser.parse(new_text);
        self.progress_reporter.report(&format!(
            "✅ Detected {} dependency node(s) in the new report",
            new_tree.node_count() - 1
        ));

        let old_tree = old_text.map(|text| {
            let tree = self.parser.parse(text);
            self.progress_reporter.report(&format!(
                "✅ Detected {} dependency node(s) in the previous report",
                tree.node_count() - 1
            ));
            tree
        });

        (new_tree, old_tree)
    }

    /// Applies coordinate exclusion patterns to both trees
    ///
    /// # Arguments
    /// * `new_tree` - Parsed new report tree
    /// * `old_tree` - Parsed old report tree, when present
    /// * `request` - The diff request containing exclusion patterns
    ///
    /// # Returns
    /// Tuple of (pruned new tree, pruned old tree)
    ///
    /// # Errors
    /// Returns an error if the patterns are invalid or the new tree is
    /// left with nothing but its root
    fn apply_exclusion_filters(
        &self,
        new_tree: DepTree,
        old_tree: Option<DepTree>,
        request: &DiffRequest,
    ) -> Result<(DepTree, Option<DepTree>)> {
        if request.exclude_patterns.is_empty() {
            return Ok((new_tree, old_tree));
        }

        let filter = CoordinateFilter::new(request.exclude_patterns.clone())?;
        let original_count = new_tree.node_count();
        let pruned_new = filter.prune(&new_tree);
        let pruned_old = old_tree.as_ref().map(|tree| filter.prune(tree));

        let excluded_count = original_count - pruned_new.node_count();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} dependency node(s) based on filters",
                excluded_count
            ));
        }

        // Check if every dependency was excluded
        if original_count > 1 && pruned_new.node_count() == 1 {
            anyhow::bail!(
                "All {} dependency node(s) were excluded by the provided filters. \
                     The report would be empty. Please adjust your exclusion patterns.",
                original_count - 1
            );
        }

        // Warn about unmatched patterns
        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        Ok((pruned_new, pruned_old))
    }

    /// Merges the old and new trees into the result tree
    ///
    /// # Returns
    /// Tuple of (result tree, whether a diff was computed)
    fn merge_trees(new_tree: DepTree, old_tree: Option<DepTree>) -> (DepTree, bool) {
        match old_tree {
            Some(old) => (DiffEngine::merge(Some(&old), Some(&new_tree)), true),
            None => (new_tree, false),
        }
    }

    /// Builds the coordinate index and the forced update scan
    fn index_and_scan(&self, tree: &DepTree) -> (NodeIndex, ForcedUpdateScan) {
        let index = NodeIndexer::index(tree);
        let scan = ForcedUpdateScanner::scan(tree);

        if !scan.is_empty() {
            self.progress_reporter.report(&format!(
                "🔍 Detected {} forced update(s)",
                scan.forced_coordinate_count()
            ));
        }

        (index, scan)
    }

    /// Stamps metadata and assembles the final response
    fn build_response(
        &self,
        tree: DepTree,
        diff_available: bool,
        index: NodeIndex,
        scan: ForcedUpdateScan,
    ) -> DiffResponse {
        let metadata =
            ReportMetadata::generated_now(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

        self.progress_reporter
            .report_completion("✅ Dependency report analysis complete");

        DiffResponse::new(tree, diff_available, index, scan, metadata)
    }
}

impl<RR, PR> TreeDiffPort for DiffReportsUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    fn diff_reports(&self, request: DiffRequest) -> Result<DiffResponse> {
        self.execute(request)
    }

    fn validate_report_path(&self, path: &Path) -> Result<()> {
        validate_readable_report(path, MAX_REPORT_SIZE)
    }
}
