use crate::application::read_models::{
    ChangeSummary, DiffReadModel, ForcedUpdateView, MetadataView, NodeView,
};
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DiffDocument {
    metadata: Metadata,
    #[serde(rename = "diffAvailable")]
    diff_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
    tree: Node,
    #[serde(rename = "forcedUpdates")]
    forced_updates: Vec<ForcedUpdate>,
    #[serde(rename = "nodeCount")]
    node_count: usize,
    #[serde(rename = "distinctCoordinateCount")]
    distinct_coordinate_count: usize,
}

#[derive(Debug, Serialize)]
struct Metadata {
    #[serde(rename = "generatedAt")]
    generated_at: String,
    #[serde(rename = "toolName")]
    tool_name: String,
    #[serde(rename = "toolVersion")]
    tool_version: String,
}

#[derive(Debug, Serialize)]
struct Summary {
    added: usize,
    removed: usize,
    changed: usize,
    unchanged: usize,
}

#[derive(Debug, Serialize)]
struct Node {
    coordinate: String,
    #[serde(rename = "declaredVersion")]
    declared_version: String,
    #[serde(rename = "resolvedVersion")]
    resolved_version: String,
    #[serde(rename = "prevDeclaredVersion", skip_serializing_if = "Option::is_none")]
    prev_declared_version: Option<String>,
    #[serde(rename = "prevResolvedVersion", skip_serializing_if = "Option::is_none")]
    prev_resolved_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    depth: usize,
    #[serde(rename = "descendantCount")]
    descendant_count: usize,
    path: String,
    forced: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

#[derive(Debug, Serialize)]
struct ForcedUpdate {
    coordinate: String,
    resolved: String,
    #[serde(rename = "declaredVariants")]
    declared_variants: Vec<String>,
    #[serde(rename = "occurrenceCount")]
    occurrence_count: usize,
    paths: Vec<String>,
}

/// JsonFormatter adapter for generating the machine-readable JSON envelope
///
/// This adapter implements the DiffFormatter port for JSON format.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for JsonFormatter {
    fn format(&self, model: &DiffReadModel) -> Result<String> {
        let document = DiffDocument {
            metadata: self.build_metadata(&model.metadata),
            diff_available: model.diff_available,
            summary: model.summary.as_ref().map(|s| self.build_summary(s)),
            tree: self.build_node(&model.tree),
            forced_updates: self.build_forced_updates(&model.forced_updates),
            node_count: model.node_count,
            distinct_coordinate_count: model.distinct_coordinate_count,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    /// Build metadata from MetadataView
    fn build_metadata(&self, metadata: &MetadataView) -> Metadata {
        Metadata {
            generated_at: metadata.generated_at.clone(),
            tool_name: metadata.tool_name.clone(),
            tool_version: metadata.tool_version.clone(),
        }
    }

    /// Build summary from ChangeSummary
    fn build_summary(&self, summary: &ChangeSummary) -> Summary {
        Summary {
            added: summary.added,
            removed: summary.removed,
            changed: summary.changed,
            unchanged: summary.unchanged,
        }
    }

    /// Build a node and its children from NodeView
    fn build_node(&self, view: &NodeView) -> Node {
        Node {
            coordinate: view.coordinate.clone(),
            declared_version: view.declared_version.clone(),
            resolved_version: view.resolved_version.clone(),
            prev_declared_version: view.prev_declared_version.clone(),
            prev_resolved_version: view.prev_resolved_version.clone(),
            status: view.status.map(|status| status.as_str()),
            depth: view.depth,
            descendant_count: view.descendant_count,
            path: view.path.clone(),
            forced: view.forced,
            children: view
                .children
                .iter()
                .map(|child| self.build_node(child))
                .collect(),
        }
    }

    /// Build forced updates from ForcedUpdateView slice
    fn build_forced_updates(&self, updates: &[ForcedUpdateView]) -> Vec<ForcedUpdate> {
        updates
            .iter()
            .map(|update| ForcedUpdate {
                coordinate: update.coordinate.clone(),
                resolved: update.resolved.clone(),
                declared_variants: update.declared_variants.clone(),
                occurrence_count: update.occurrence_count,
                paths: update.paths.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::StatusView;

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
        let mut alpha = node("org.example:alpha", "1.0.0", "1.1.0", 1);
        alpha.path = "org.example:alpha:1.1.0".to_string();

        let mut root = node("root:root", "", "", 0);
        root.children = vec![alpha];
        root.descendant_count = 1;

        DiffReadModel {
            metadata: MetadataView {
                generated_at: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "gradle-depdiff".to_string(),
                tool_version: "0.2.0".to_string(),
            },
            diff_available: false,
            summary: None,
            tree: root,
            forced_updates: vec![ForcedUpdateView {
                coordinate: "org.example:alpha".to_string(),
                resolved: "1.1.0".to_string(),
                declared_variants: vec!["1.0.0".to_string()],
                occurrence_count: 1,
                paths: vec!["org.example:alpha:1.1.0".to_string()],
            }],
            node_count: 2,
            distinct_coordinate_count: 1,
        }
    }

    #[test]
    fn test_format_basic() {
        let model = create_test_read_model();
        let formatter = JsonFormatter::new();

        let result = formatter.format(&model);

        assert!(result.is_ok());
        let json = result.unwrap();
        assert!(json.contains("\"generatedAt\": \"2024-01-01T00:00:00Z\""));
        assert!(json.contains("\"toolName\": \"gradle-depdiff\""));
        assert!(json.contains("\"diffAvailable\": false"));
        assert!(json.contains("\"nodeCount\": 2"));
        assert!(json.contains("\"distinctCoordinateCount\": 1"));
        assert!(json.contains("\"coordinate\": \"org.example:alpha\""));
        assert!(json.contains("\"declaredVersion\": \"1.0.0\""));
        assert!(json.contains("\"resolvedVersion\": \"1.1.0\""));
        assert!(json.contains("\"forced\": true"));
    }

    #[test]
    fn test_format_skips_summary_without_diff() {
        let model = create_test_read_model();
        let json = JsonFormatter::new().format(&model).unwrap();
        assert!(!json.contains("\"summary\""));
        assert!(!json.contains("\"status\""));
    }

    #[test]
    fn test_format_with_diff_summary_and_statuses() {
        let mut model = create_test_read_model();
        model.diff_available = true;
        model.summary = Some(ChangeSummary {
            added: 0,
            removed: 1,
            changed: 1,
            unchanged: 2,
        });
        model.tree.children[0].status = Some(StatusView::Changed);
        model.tree.children[0].prev_declared_version = Some("0.9.0".to_string());
        model.tree.children[0].prev_resolved_version = Some("0.9.0".to_string());

        let json = JsonFormatter::new().format(&model).unwrap();

        assert!(json.contains("\"diffAvailable\": true"));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"removed\": 1"));
        assert!(json.contains("\"status\": \"changed\""));
        assert!(json.contains("\"prevDeclaredVersion\": \"0.9.0\""));
    }

    #[test]
    fn test_format_forced_updates_envelope() {
        let model = create_test_read_model();
        let json = JsonFormatter::new().format(&model).unwrap();

        assert!(json.contains("\"forcedUpdates\""));
        assert!(json.contains("\"declaredVariants\""));
        assert!(json.contains("\"occurrenceCount\": 1"));
        assert!(json.contains("\"paths\""));
    }

    #[test]
    fn test_format_nested_children() {
        let mut model = create_test_read_model();
        model.tree.children[0].children = vec![node("org.example:leaf", "3.0.0", "3.0.0", 2)];

        let json = JsonFormatter::new().format(&model).unwrap();

        assert!(json.contains("\"children\""));
        assert!(json.contains("\"org.example:leaf\""));
        // Leaves serialize without an empty children array
        assert!(json.contains("\"depth\": 2"));
    }

    #[test]
    fn test_format_output_is_valid_json() {
        let model = create_test_read_model();
        let json = JsonFormatter::new().format(&model).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["tree"]["coordinate"], "root:root");
        assert_eq!(parsed["tree"]["children"][0]["forced"], true);
        assert_eq!(parsed["forcedUpdates"][0]["resolved"], "1.1.0");
    }
}
