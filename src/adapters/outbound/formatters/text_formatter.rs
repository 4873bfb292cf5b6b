use crate::application::read_models::{ChangeSummary, DiffReadModel, ForcedUpdateView, NodeView, StatusView};
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;
use crate::tree_diff::domain::PROJECT_VERSION;
use owo_colors::OwoColorize;

/// TextFormatter adapter for Gradle-like plain text tree rendering
///
/// This adapter implements the DiffFormatter port for the default terminal
/// output: the result tree drawn with Gradle's connector characters,
/// followed by the change summary and the forced-updates section.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the coordinate and version transition of one node
    ///
    /// Forced updates keep Gradle's own notation (`1.0.0 -> 1.2.0`).
    /// Project nodes and bare fallback nodes render without a version.
    fn render_payload(node: &NodeView) -> String {
        let mut payload = node.coordinate.clone();
        if node.declared_version.is_empty() || node.declared_version == PROJECT_VERSION {
            return payload;
        }
        payload.push(':');
        payload.push_str(&node.declared_version);
        if !node.resolved_version.is_empty() && node.resolved_version != node.declared_version {
            payload.push_str(" -> ");
            payload.push_str(&node.resolved_version);
        }
        payload
    }

    /// Renders the colored status marker for diff mode
    fn render_status(node: &NodeView) -> String {
        let Some(status) = node.status else {
            return String::new();
        };
        match status {
            StatusView::Added => format!(" {}", "[added]".green()),
            StatusView::Removed => format!(" {}", "[removed]".red()),
            StatusView::Changed => {
                let was = match (&node.prev_declared_version, &node.prev_resolved_version) {
                    (Some(declared), Some(resolved)) if declared != resolved => {
                        format!("{} -> {}", declared, resolved)
                    }
                    (Some(declared), _) => declared.clone(),
                    (None, Some(resolved)) => resolved.clone(),
                    (None, None) => String::new(),
                };
                if was.is_empty() {
                    format!(" {}", "[changed]".yellow())
                } else {
                    format!(" {} (was {})", "[changed]".yellow(), was)
                }
            }
            StatusView::Unchanged => String::new(),
        }
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    /// Walks the tree iteratively, carrying the drawn prefix per node
    fn render_tree(&self, output: &mut String, root: &NodeView) {
        output.push_str("root\n");

        let mut stack: Vec<(&NodeView, String, bool)> = Vec::new();
        let child_count = root.children.len();
        for (position, child) in root.children.iter().enumerate().rev() {
            stack.push((child, String::new(), position == child_count - 1));
        }

        while let Some((node, prefix, is_last)) = stack.pop() {
            let connector = if is_last { "\\--- " } else { "+--- " };
            output.push_str(&format!(
                "{}{}{}{}\n",
                prefix,
                connector,
                Self::render_payload(node),
                Self::render_status(node)
            ));

            let child_prefix = format!("{}{}", prefix, if is_last { "     " } else { "|    " });
            let child_count = node.children.len();
            for (position, child) in node.children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), position == child_count - 1));
            }
        }
    }

    fn render_summary(output: &mut String, summary: &ChangeSummary) {
        output.push_str(&format!(
            "\nChanges: {} added, {} removed, {} changed, {} unchanged\n",
            summary.added, summary.removed, summary.changed, summary.unchanged
        ));
    }

    fn render_forced_updates(output: &mut String, forced_updates: &[ForcedUpdateView]) {
        output.push_str(&format!("\nForced updates ({}):\n", forced_updates.len()));
        for update in forced_updates {
            output.push_str(&format!(
                "  {} -> {} (declared {}; {} occurrence(s))\n",
                update.coordinate,
                update.resolved,
                update.declared_variants.join(", "),
                update.occurrence_count
            ));
            for path in &update.paths {
                output.push_str(&format!("    via {}\n", path));
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for TextFormatter {
    fn format(&self, model: &DiffReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_tree(&mut output, &model.tree);

        if let Some(summary) = &model.summary {
            Self::render_summary(&mut output, summary);
        }

        if !model.forced_updates.is_empty() {
            Self::render_forced_updates(&mut output, &model.forced_updates);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::MetadataView;

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
            path: String::new(),
            forced: !resolved.is_empty() && declared != resolved,
            children: vec![],
        }
    }

    fn create_test_read_model() -> DiffReadModel {
        let mut alpha = node("org.example:alpha", "1.0.0", "1.0.0", 1);
        alpha.children = vec![node(
            "org.jetbrains.kotlin:kotlin-stdlib",
            "2.0.21",
            "2.1.20",
            2,
        )];
        alpha.descendant_count = 1;
        let gamma = node("com.other:gamma", "2.0.0", "2.0.0", 1);

        let mut root = node("root:root", "", "", 0);
        root.children = vec![alpha, gamma];
        root.descendant_count = 3;

        DiffReadModel {
            metadata: MetadataView {
                generated_at: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "gradle-depdiff".to_string(),
                tool_version: "0.2.0".to_string(),
            },
            diff_available: false,
            summary: None,
            tree: root,
            forced_updates: vec![],
            node_count: 4,
            distinct_coordinate_count: 3,
        }
    }

    #[test]
    fn test_format_renders_gradle_style_connectors() {
        let model = create_test_read_model();
        let formatter = TextFormatter::new();

        let output = formatter.format(&model).unwrap();

        assert!(output.starts_with("root\n"));
        assert!(output.contains("+--- org.example:alpha:1.0.0"));
        assert!(output.contains("|    \\--- org.jetbrains.kotlin:kotlin-stdlib:2.0.21 -> 2.1.20"));
        assert!(output.contains("\\--- com.other:gamma:2.0.0"));
    }

    #[test]
    fn test_format_last_child_subtree_uses_blank_prefix() {
        let mut model = create_test_read_model();
        // Move the subtree under the last root-level child
        model.tree.children.swap(0, 1);

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("\\--- org.example:alpha:1.0.0"));
        assert!(output.contains("     \\--- org.jetbrains.kotlin:kotlin-stdlib:2.0.21 -> 2.1.20"));
    }

    #[test]
    fn test_format_marks_statuses_with_previous_versions() {
        let mut model = create_test_read_model();
        model.diff_available = true;
        model.summary = Some(ChangeSummary {
            added: 1,
            removed: 0,
            changed: 1,
            unchanged: 1,
        });
        model.tree.children[0].status = Some(StatusView::Changed);
        model.tree.children[0].prev_declared_version = Some("0.9.0".to_string());
        model.tree.children[0].prev_resolved_version = Some("0.9.0".to_string());
        model.tree.children[0].children[0].status = Some(StatusView::Unchanged);
        model.tree.children[1].status = Some(StatusView::Added);

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("[changed]"));
        assert!(output.contains("(was 0.9.0)"));
        assert!(output.contains("[added]"));
        assert!(!output.contains("[unchanged]"));
    }

    #[test]
    fn test_format_changed_node_with_forced_previous_resolution() {
        let mut model = create_test_read_model();
        model.diff_available = true;
        model.tree.children[0].status = Some(StatusView::Changed);
        model.tree.children[0].prev_declared_version = Some("0.9.0".to_string());
        model.tree.children[0].prev_resolved_version = Some("0.9.5".to_string());

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("(was 0.9.0 -> 0.9.5)"));
    }

    #[test]
    fn test_format_summary_line() {
        let mut model = create_test_read_model();
        model.diff_available = true;
        model.summary = Some(ChangeSummary {
            added: 1,
            removed: 4,
            changed: 2,
            unchanged: 6,
        });

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("Changes: 1 added, 4 removed, 2 changed, 6 unchanged"));
    }

    #[test]
    fn test_format_without_diff_has_no_summary() {
        let model = create_test_read_model();
        let output = TextFormatter::new().format(&model).unwrap();
        assert!(!output.contains("Changes:"));
    }

    #[test]
    fn test_format_forced_updates_section() {
        let mut model = create_test_read_model();
        model.forced_updates = vec![ForcedUpdateView {
            coordinate: "org.jetbrains.kotlin:kotlin-stdlib".to_string(),
            resolved: "2.1.20".to_string(),
            declared_variants: vec!["2.0.21".to_string()],
            occurrence_count: 1,
            paths: vec![
                "org.example:alpha:1.0.0  \u{203a}  org.jetbrains.kotlin:kotlin-stdlib:2.1.20"
                    .to_string(),
            ],
        }];

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("Forced updates (1):"));
        assert!(output
            .contains("org.jetbrains.kotlin:kotlin-stdlib -> 2.1.20 (declared 2.0.21; 1 occurrence(s))"));
        assert!(output.contains("    via org.example:alpha:1.0.0"));
    }

    #[test]
    fn test_format_project_node_renders_without_version() {
        let mut model = create_test_read_model();
        model
            .tree
            .children
            .push(node("project:core", "project", "project", 1));

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("\\--- project:core\n"));
        assert!(!output.contains("project:core:project"));
    }

    #[test]
    fn test_format_bare_fallback_node_renders_coordinate_only() {
        let mut model = create_test_read_model();
        model.tree.children.push(node("unparsed-token", "", "", 1));

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("\\--- unparsed-token\n"));
    }
}
