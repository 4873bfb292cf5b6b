use crate::tree_diff::domain::{DepNode, DepTree, NodeId};

/// Separator between path segments in canonical path strings.
pub const PATH_SEPARATOR: &str = "  ›  ";

/// Result of resolving a canonical path against a tree.
///
/// `node` is the deepest node reached (the root when no segment matched,
/// `None` for a blank path); `ancestors` lists the nodes descended into,
/// in order, excluding the root.
#[derive(Debug, Clone)]
pub struct PathLookup {
    pub node: Option<NodeId>,
    pub ancestors: Vec<NodeId>,
}

/// PathResolver service rendering nodes to canonical path strings and
/// resolving such strings back to nodes
///
/// Canonical paths are the stable, human-readable node addresses used by
/// the forced-update scan and the formatters. A path round-trips through
/// `render` and `resolve` as long as no two siblings render to the same
/// segment; resolution always takes the first matching sibling and stops
/// at the deepest segment it could match.
pub struct PathResolver;

impl PathResolver {
    /// The path segment for one node: `coordinate:resolved`, just the
    /// coordinate when the resolved version is empty, and the literal
    /// `root` for the root sentinel.
    pub fn segment(node: &DepNode) -> String {
        if node.is_root() {
            "root".to_string()
        } else {
            Self::child_segment(node)
        }
    }

    fn child_segment(node: &DepNode) -> String {
        if node.resolved_version().is_empty() {
            node.coordinate().as_str().to_string()
        } else {
            format!("{}:{}", node.coordinate(), node.resolved_version())
        }
    }

    /// Renders a chain of nodes into one canonical path string.
    pub fn render(tree: &DepTree, chain: &[NodeId]) -> String {
        chain
            .iter()
            .map(|&id| Self::segment(tree.node(id)))
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// Renders the canonical path of a single node, from its topmost
    /// non-root ancestor down to the node itself.
    pub fn render_node(tree: &DepTree, id: NodeId) -> String {
        Self::render(tree, &tree.ancestor_chain(id))
    }

    /// Resolves a canonical path string against a tree.
    ///
    /// Segments are trimmed, empty segments are dropped and a leading
    /// `root` segment is skipped. From the root downwards, each segment
    /// selects the first child whose rendered segment matches exactly;
    /// resolution stops early when no child matches.
    pub fn resolve(tree: &DepTree, path: &str) -> PathLookup {
        let segments: Vec<&str> = path
            .split(PATH_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            return PathLookup {
                node: None,
                ancestors: Vec::new(),
            };
        }

        let mut remaining = segments.as_slice();
        if remaining[0] == "root" {
            remaining = &remaining[1..];
        }

        let mut current = tree.root();
        let mut ancestors = Vec::new();
        for segment in remaining {
            let next = tree
                .children(current)
                .iter()
                .copied()
                .find(|&child| Self::child_segment(tree.node(child)) == *segment);
            match next {
                Some(child) => {
                    ancestors.push(child);
                    current = child;
                }
                None => break,
            }
        }

        PathLookup {
            node: Some(current),
            ancestors,
        }
    }
}
