use super::NodeId;
use std::collections::BTreeSet;

/// Aggregated forced-update evidence for one coordinate.
///
/// A coordinate is a forced update when at least one of its occurrences
/// declares a version that Gradle resolved to a different one. Evidence
/// accumulates across occurrences: every overridden declared version, every
/// node where the override happened, and the canonical paths leading to
/// those nodes. `resolved` reflects the override's target; when occurrences
/// disagree, the last one in pre-order wins.
#[derive(Debug, Clone)]
pub struct ForcedUpdateInfo {
    resolved: String,
    declared_variants: BTreeSet<String>,
    occurrences: Vec<NodeId>,
    paths: BTreeSet<String>,
}

impl ForcedUpdateInfo {
    pub(crate) fn new() -> Self {
        Self {
            resolved: String::new(),
            declared_variants: BTreeSet::new(),
            occurrences: Vec::new(),
            paths: BTreeSet::new(),
        }
    }

    pub(crate) fn record(&mut self, declared: &str, resolved: &str, node: NodeId, path: String) {
        self.declared_variants.insert(declared.to_string());
        self.occurrences.push(node);
        self.resolved = resolved.to_string();
        self.paths.insert(path);
    }

    /// The version the coordinate actually resolves to.
    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    /// Every declared version that was overridden, sorted.
    pub fn declared_variants(&self) -> &BTreeSet<String> {
        &self.declared_variants
    }

    /// Nodes where the override was observed, in traversal order.
    pub fn occurrences(&self) -> &[NodeId] {
        &self.occurrences
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Canonical paths of the forced occurrences, deduplicated and sorted.
    pub fn paths(&self) -> &BTreeSet<String> {
        &self.paths
    }
}
