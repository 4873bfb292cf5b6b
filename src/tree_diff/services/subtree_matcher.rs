use crate::tree_diff::domain::{DepTree, NodeId};

/// SubtreeMatcher service for case-insensitive text search over trees
///
/// A node matches when its `coordinate:declared:resolved` haystack contains
/// the query; a subtree matches when the node itself or any descendant
/// matches. A blank query matches everything, so filtering with it is a
/// no-op.
pub struct SubtreeMatcher {
    query: String,
}

impl SubtreeMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches_node(&self, tree: &DepTree, id: NodeId) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let node = tree.node(id);
        let haystack = format!(
            "{}:{}:{}",
            node.coordinate(),
            node.declared_version(),
            node.resolved_version()
        )
        .to_lowercase();
        haystack.contains(&self.query)
    }

    /// Explicit-stack descent; bails out at the first matching node.
    pub fn matches_subtree(&self, tree: &DepTree, id: NodeId) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if self.matches_node(tree, current) {
                return true;
            }
            stack.extend_from_slice(tree.children(current));
        }
        false
    }
}
