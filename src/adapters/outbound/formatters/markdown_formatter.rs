use crate::application::read_models::{
    DiffReadModel, ForcedUpdateView, MetadataView, NodeView, StatusView,
};
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;

/// Markdown table header for changed dependencies
const CHANGES_TABLE_HEADER: &str = "| Dependency | Status | Previous | Current |\n";

/// Markdown table separator line
const CHANGES_TABLE_SEPARATOR: &str = "|------------|--------|----------|---------|\n";

/// Markdown table header for forced updates
const FORCED_TABLE_HEADER: &str = "| Dependency | Declared | Resolved | Occurrences | Paths |\n";

/// Markdown table separator line for the forced-updates table
const FORCED_TABLE_SEPARATOR: &str =
    "|------------|----------|----------|-------------|-------|\n";

/// MarkdownFormatter adapter for generating a human-readable Markdown report
///
/// This adapter implements the DiffFormatter port for Markdown format,
/// including change and forced-update tables with registry hyperlinks.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Generate a Markdown hyperlink to the coordinate's mvnrepository.com page.
    /// Project modules and bare tokens have no registry page and render as plain text.
    fn coordinate_link(coordinate: &str, version: &str) -> String {
        match coordinate.split_once(':') {
            Some((group, artifact))
                if !group.is_empty() && !artifact.is_empty() && group != "project" =>
            {
                let mut url =
                    format!("https://mvnrepository.com/artifact/{}/{}", group, artifact);
                if !version.is_empty() {
                    url.push('/');
                    url.push_str(&urlencoding::encode(version));
                }
                format!(
                    "[{}]({})",
                    Self::escape_markdown_table_cell(coordinate),
                    url
                )
            }
            _ => Self::escape_markdown_table_cell(coordinate),
        }
    }

    /// Table label for a change status
    fn status_label(status: StatusView) -> &'static str {
        match status {
            StatusView::Added => "Added",
            StatusView::Removed => "Removed",
            StatusView::Changed => "Changed",
            StatusView::Unchanged => "Unchanged",
        }
    }

    /// Render a declared/resolved pair as a single version cell
    fn version_cell(declared: &str, resolved: &str) -> String {
        if declared.is_empty() && resolved.is_empty() {
            return "N/A".to_string();
        }
        if !resolved.is_empty() && resolved != declared {
            format!("{} -> {}", declared, resolved)
        } else {
            declared.to_string()
        }
    }

    /// Collects every changed node in display order, skipping the synthetic root
    fn collect_changed_rows(root: &NodeView) -> Vec<(&NodeView, StatusView)> {
        let mut rows = Vec::new();
        let mut stack: Vec<&NodeView> = root.children.iter().rev().collect();

        while let Some(view) = stack.pop() {
            if let Some(status) = view.status {
                if status != StatusView::Unchanged {
                    rows.push((view, status));
                }
            }
            for child in view.children.iter().rev() {
                stack.push(child);
            }
        }
        rows
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the header section
    fn render_header(&self, output: &mut String, metadata: &MetadataView) {
        output.push_str("# Dependency Diff Report\n\n");
        output.push_str(&format!(
            "Generated by {} v{} at {}\n\n",
            metadata.tool_name, metadata.tool_version, metadata.generated_at
        ));
    }

    /// Renders the summary section
    fn render_summary(&self, output: &mut String, model: &DiffReadModel) {
        output.push_str("## Summary\n\n");

        let nodes = model.node_count.saturating_sub(1);
        output.push_str(&format!(
            "{} dependency {} ({} distinct {}).\n\n",
            nodes,
            if nodes == 1 { "node" } else { "nodes" },
            model.distinct_coordinate_count,
            if model.distinct_coordinate_count == 1 {
                "coordinate"
            } else {
                "coordinates"
            }
        ));

        match &model.summary {
            Some(summary) => {
                let total = summary.changed_total();
                output.push_str(&format!(
                    "**Found {} {} against the baseline report.**\n\n",
                    total,
                    if total == 1 { "change" } else { "changes" }
                ));
                output.push_str(&format!("- Added: {}\n", summary.added));
                output.push_str(&format!("- Removed: {}\n", summary.removed));
                output.push_str(&format!("- Changed: {}\n", summary.changed));
                output.push_str(&format!("- Unchanged: {}\n\n", summary.unchanged));
            }
            None => {
                output.push_str(
                    "*No baseline report supplied; change detection was skipped.*\n\n",
                );
            }
        }
    }

    /// Renders the changes table
    fn render_changes(&self, output: &mut String, tree: &NodeView) {
        output.push_str("## Changes\n\n");

        let rows = Self::collect_changed_rows(tree);
        if rows.is_empty() {
            output.push_str("*No changes detected.*\n\n");
            return;
        }

        output.push_str(CHANGES_TABLE_HEADER);
        output.push_str(CHANGES_TABLE_SEPARATOR);

        for (view, status) in rows {
            let (previous, current) = match status {
                StatusView::Added => (
                    "N/A".to_string(),
                    Self::version_cell(&view.declared_version, &view.resolved_version),
                ),
                StatusView::Removed => (
                    Self::version_cell(&view.declared_version, &view.resolved_version),
                    "N/A".to_string(),
                ),
                _ => {
                    let previous = match (
                        view.prev_declared_version.as_deref(),
                        view.prev_resolved_version.as_deref(),
                    ) {
                        (Some(declared), Some(resolved)) => {
                            Self::version_cell(declared, resolved)
                        }
                        _ => "N/A".to_string(),
                    };
                    (
                        previous,
                        Self::version_cell(&view.declared_version, &view.resolved_version),
                    )
                }
            };

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::coordinate_link(&view.coordinate, &view.resolved_version),
                Self::status_label(status),
                Self::escape_markdown_table_cell(&previous),
                Self::escape_markdown_table_cell(&current),
            ));
        }
        output.push('\n');
    }

    /// Renders the forced-updates section
    fn render_forced_updates(&self, output: &mut String, updates: &[ForcedUpdateView]) {
        output.push_str("## Forced Updates\n\n");

        if updates.is_empty() {
            output.push_str("*No forced updates detected.*\n");
            return;
        }

        output.push_str(&format!(
            "**Found {} forced {}.**\n\n",
            updates.len(),
            if updates.len() == 1 {
                "update"
            } else {
                "updates"
            }
        ));

        output.push_str(FORCED_TABLE_HEADER);
        output.push_str(FORCED_TABLE_SEPARATOR);

        for update in updates {
            let declared = update
                .declared_variants
                .iter()
                .map(|variant| Self::escape_markdown_table_cell(variant))
                .collect::<Vec<_>>()
                .join(", ");
            let paths = update
                .paths
                .iter()
                .map(|path| Self::escape_markdown_table_cell(path))
                .collect::<Vec<_>>()
                .join("<br>");

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::coordinate_link(&update.coordinate, &update.resolved),
                declared,
                Self::escape_markdown_table_cell(&update.resolved),
                update.occurrence_count,
                paths,
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for MarkdownFormatter {
    fn format(&self, model: &DiffReadModel) -> Result<String> {
        let mut output = String::new();

        // Header section
        self.render_header(&mut output, &model.metadata);

        // Summary section
        self.render_summary(&mut output, model);

        // Changes table (if a baseline report was diffed)
        if model.diff_available {
            self.render_changes(&mut output, &model.tree);
        }

        // Forced updates section
        self.render_forced_updates(&mut output, &model.forced_updates);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ChangeSummary;

    fn node(coordinate: &str, declared: &str, resolved: &str, depth: usize) -> NodeView {
        NodeView {
            coordinate: coordinate.to_string(),
            declared_version: declared.to_string(),
            resolved_version: resolved.to_string(),
            prev_declared_version: None,
            prev_resolved_version: None,
            status: None,
            depth,
            descendant_count: 0,
            path: format!("{}:{}", coordinate, resolved),
            forced: !resolved.is_empty() && declared != resolved,
            children: vec![],
        }
    }

    fn create_test_read_model() -> DiffReadModel {
        let mut alpha = node("org.example:alpha", "1.0.0", "1.1.0", 1);
        alpha.status = Some(StatusView::Changed);
        alpha.prev_declared_version = Some("0.9.0".to_string());
        alpha.prev_resolved_version = Some("0.9.0".to_string());

        let mut beta = node("org.example:beta", "2.0.0", "2.0.0", 1);
        beta.status = Some(StatusView::Added);

        let mut gamma = node("org.example:gamma", "3.0.0", "3.0.0", 1);
        gamma.status = Some(StatusView::Removed);

        let mut delta = node("org.example:delta", "4.0.0", "4.0.0", 1);
        delta.status = Some(StatusView::Unchanged);

        let mut root = node("root:root", "", "", 0);
        root.children = vec![alpha, beta, gamma, delta];
        root.descendant_count = 4;

        DiffReadModel {
            metadata: MetadataView {
                generated_at: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "gradle-depdiff".to_string(),
                tool_version: "0.2.0".to_string(),
            },
            diff_available: true,
            summary: Some(ChangeSummary {
                added: 1,
                removed: 1,
                changed: 1,
                unchanged: 1,
            }),
            tree: root,
            forced_updates: vec![ForcedUpdateView {
                coordinate: "org.example:alpha".to_string(),
                resolved: "1.1.0".to_string(),
                declared_variants: vec!["0.9.0".to_string(), "1.0.0".to_string()],
                occurrence_count: 2,
                paths: vec![
                    "org.example:alpha:1.1.0".to_string(),
                    "org.example:parent:2.0.0  \u{203a}  org.example:alpha:1.1.0".to_string(),
                ],
            }],
            node_count: 5,
            distinct_coordinate_count: 4,
        }
    }

    #[test]
    fn test_format_basic() {
        let model = create_test_read_model();
        let formatter = MarkdownFormatter::new();

        let result = formatter.format(&model);

        assert!(result.is_ok());
        let markdown = result.unwrap();
        assert!(markdown.contains("# Dependency Diff Report"));
        assert!(markdown.contains("Generated by gradle-depdiff v0.2.0 at 2024-01-01T00:00:00Z"));
        assert!(markdown.contains("## Summary"));
    }

    #[test]
    fn test_format_summary_counts() {
        let model = create_test_read_model();
        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(markdown.contains("4 dependency nodes (4 distinct coordinates)."));
        assert!(markdown.contains("**Found 3 changes against the baseline report.**"));
        assert!(markdown.contains("- Added: 1"));
        assert!(markdown.contains("- Removed: 1"));
        assert!(markdown.contains("- Changed: 1"));
        assert!(markdown.contains("- Unchanged: 1"));
    }

    #[test]
    fn test_format_singular_change() {
        let mut model = create_test_read_model();
        model.summary = Some(ChangeSummary {
            added: 1,
            removed: 0,
            changed: 0,
            unchanged: 3,
        });

        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(markdown.contains("**Found 1 change against the baseline report.**"));
    }

    #[test]
    fn test_format_changes_table() {
        let model = create_test_read_model();
        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(markdown.contains("## Changes"));
        assert!(markdown.contains(CHANGES_TABLE_HEADER));
        assert!(markdown.contains(
            "| [org.example:alpha](https://mvnrepository.com/artifact/org.example/alpha/1.1.0) \
             | Changed | 0.9.0 | 1.0.0 -> 1.1.0 |"
        ));
        assert!(markdown.contains("| Added | N/A | 2.0.0 |"));
        assert!(markdown.contains("| Removed | 3.0.0 | N/A |"));
        // Unchanged nodes stay out of the changes table
        assert!(!markdown.contains("org.example:delta"));
    }

    #[test]
    fn test_format_without_diff_skips_changes() {
        let mut model = create_test_read_model();
        model.diff_available = false;
        model.summary = None;

        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(!markdown.contains("## Changes"));
        assert!(markdown.contains("*No baseline report supplied; change detection was skipped.*"));
    }

    #[test]
    fn test_format_forced_updates_table() {
        let model = create_test_read_model();
        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(markdown.contains("## Forced Updates"));
        assert!(markdown.contains("**Found 1 forced update.**"));
        assert!(markdown.contains(FORCED_TABLE_HEADER));
        assert!(markdown.contains("| 0.9.0, 1.0.0 | 1.1.0 | 2 |"));
        assert!(markdown.contains("org.example:alpha:1.1.0<br>org.example:parent:2.0.0"));
    }

    #[test]
    fn test_format_without_forced_updates() {
        let mut model = create_test_read_model();
        model.forced_updates.clear();

        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        assert!(markdown.contains("*No forced updates detected.*"));
        assert!(!markdown.contains(FORCED_TABLE_HEADER));
    }

    #[test]
    fn test_format_section_order() {
        let model = create_test_read_model();
        let markdown = MarkdownFormatter::new().format(&model).unwrap();

        let header_pos = markdown.find("# Dependency Diff Report").unwrap();
        let summary_pos = markdown.find("## Summary").unwrap();
        let changes_pos = markdown.find("## Changes").unwrap();
        let forced_pos = markdown.find("## Forced Updates").unwrap();

        assert!(header_pos < summary_pos);
        assert!(summary_pos < changes_pos);
        assert!(changes_pos < forced_pos);
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("plain"),
            "plain"
        );
    }

    #[test]
    fn test_coordinate_link_formats() {
        assert_eq!(
            MarkdownFormatter::coordinate_link("org.example:alpha", "1.1.0"),
            "[org.example:alpha](https://mvnrepository.com/artifact/org.example/alpha/1.1.0)"
        );
        assert_eq!(
            MarkdownFormatter::coordinate_link("org.example:alpha", ""),
            "[org.example:alpha](https://mvnrepository.com/artifact/org.example/alpha)"
        );
    }

    #[test]
    fn test_coordinate_link_encodes_version() {
        assert_eq!(
            MarkdownFormatter::coordinate_link("org.example:alpha", "1.0+build"),
            "[org.example:alpha](https://mvnrepository.com/artifact/org.example/alpha/1.0%2Bbuild)"
        );
    }

    #[test]
    fn test_coordinate_link_plain_for_non_registry_coordinates() {
        assert_eq!(
            MarkdownFormatter::coordinate_link("project:core", "project"),
            "project:core"
        );
        assert_eq!(
            MarkdownFormatter::coordinate_link("standalone", ""),
            "standalone"
        );
    }
}
