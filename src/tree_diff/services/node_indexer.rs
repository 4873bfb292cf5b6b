use crate::tree_diff::domain::{Coordinate, DepTree, NodeId};
use indexmap::IndexMap;

/// Indices over one tree, in pre-order.
///
/// Ids stored here belong to the tree the index was built from; rebuild the
/// index whenever that tree is replaced.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    by_coordinate: IndexMap<Coordinate, Vec<NodeId>>,
    all_nodes: Vec<NodeId>,
}

impl NodeIndex {
    /// Occurrences of a coordinate in traversal order; empty for unknown
    /// coordinates and for the root sentinel.
    pub fn occurrences_of(&self, coordinate: &Coordinate) -> &[NodeId] {
        self.by_coordinate
            .get(coordinate)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn by_coordinate(&self) -> &IndexMap<Coordinate, Vec<NodeId>> {
        &self.by_coordinate
    }

    /// Every node of the tree (root included) in pre-order.
    pub fn all_nodes(&self) -> &[NodeId] {
        &self.all_nodes
    }

    pub fn distinct_coordinate_count(&self) -> usize {
        self.by_coordinate.len()
    }
}

/// NodeIndexer service building coordinate lookups for a tree
///
/// Occurrences are not deduplicated: a coordinate appearing five times in
/// the report has five entries, in the order the traversal met them.
pub struct NodeIndexer;

impl NodeIndexer {
    pub fn index(tree: &DepTree) -> NodeIndex {
        let mut by_coordinate: IndexMap<Coordinate, Vec<NodeId>> = IndexMap::new();
        let mut all_nodes = Vec::with_capacity(tree.node_count());

        for id in tree.iter_preorder() {
            all_nodes.push(id);
            let node = tree.node(id);
            if node.is_root() {
                continue;
            }
            by_coordinate
                .entry(node.coordinate().clone())
                .or_default()
                .push(id);
        }

        NodeIndex {
            by_coordinate,
            all_nodes,
        }
    }
}
