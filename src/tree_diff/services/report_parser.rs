use crate::tree_diff::domain::{Coordinate, DepNode, DepTree, NodeId, PROJECT_VERSION};
use regex::Regex;

/// Branch markers emitted by Gradle's dependency report.
const BRANCH_MID: &str = "+---";
const BRANCH_LAST: &str = "\\---";

/// Both markers are four characters wide; the payload starts after them.
const MARKER_LEN: usize = 4;

/// Gradle indents one nesting level per five columns (`|    `).
const LEVEL_WIDTH: usize = 5;

/// `group:artifact:declared`, optionally followed by `-> resolved` when the
/// version was overridden by conflict resolution.
const GAV_PATTERN: &str =
    r"([A-Za-z0-9_.-]+:[A-Za-z0-9_.-]+):([^\s()]+)(?:\s*->\s*([^\s()]+))?";

/// Local project references, e.g. `project :core`.
const PROJECT_PATTERN: &str = r"project\s*:(\S+)";

/// ReportParser service turning a textual dependency report into a `DepTree`
///
/// The parser is line oriented and deliberately forgiving: lines without a
/// branch marker are skipped, unrecognized payloads degrade to best-effort
/// token splitting, and no input ever makes parsing fail. Empty input yields
/// a tree with only the root node.
pub struct ReportParser {
    gav: Regex,
    project: Regex,
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            gav: Regex::new(GAV_PATTERN).expect("dependency line pattern is valid"),
            project: Regex::new(PROJECT_PATTERN).expect("project line pattern is valid"),
        }
    }

    /// Parses a dependency report into a tree.
    ///
    /// # Arguments
    /// * `text` - Full report text, e.g. the output of `gradle dependencies`
    ///
    /// # Returns
    /// A `DepTree` whose root children are the report's top-level
    /// dependencies, with descendant counts already computed.
    pub fn parse(&self, text: &str) -> DepTree {
        let mut tree = DepTree::new();
        // Stack of the most recent node per depth; index 0 is the root.
        let mut stack: Vec<NodeId> = vec![tree.root()];

        for raw_line in text.lines() {
            let line = raw_line.replace('\t', "    ");

            // The +--- offset takes priority when both markers occur.
            let marker_offset = match (line.find(BRANCH_MID), line.find(BRANCH_LAST)) {
                (Some(offset), _) => offset,
                (None, Some(offset)) => offset,
                (None, None) => continue,
            };

            let level = (marker_offset as f64 / LEVEL_WIDTH as f64).round() as usize;
            let payload = line[marker_offset + MARKER_LEN..].trim();
            let (coordinate, declared, resolved) = self.classify(payload);

            // A line at level n nests under the latest node at level n - 1.
            // Levels deeper than the stack attach to the deepest node seen,
            // mirroring how malformed indentation is tolerated elsewhere.
            stack.truncate(level + 1);
            let parent = *stack.last().expect("depth stack always retains the root");
            let id = tree.push_child(parent, DepNode::new(coordinate, declared, resolved));
            stack.push(id);
        }

        tree.refresh_descendant_counts();
        tree
    }

    /// Extracts coordinate and versions from a branch payload.
    ///
    /// Tries three shapes in order: `group:artifact:version [-> resolved]`,
    /// a project reference, and finally a bare first token split on `:`.
    fn classify(&self, payload: &str) -> (Coordinate, String, String) {
        if let Some(caps) = self.gav.captures(payload) {
            let coordinate = Coordinate::new(&caps[1]);
            let declared = caps[2].to_string();
            let resolved = caps
                .get(3)
                .map(|m| m.as_str())
                .unwrap_or(declared.as_str())
                .to_string();
            return (coordinate, declared, resolved);
        }

        if let Some(caps) = self.project.captures(payload) {
            let coordinate = Coordinate::for_project(&caps[1]);
            return (
                coordinate,
                PROJECT_VERSION.to_string(),
                PROJECT_VERSION.to_string(),
            );
        }

        let token = payload.split_whitespace().next().unwrap_or("");
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() >= 2 {
            let coordinate = Coordinate::new(format!("{}:{}", parts[0], parts[1]));
            let version = parts.get(2).copied().unwrap_or("").to_string();
            (coordinate, version.clone(), version)
        } else {
            (Coordinate::new(token), String::new(), String::new())
        }
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
