use super::{Coordinate, DepNode, NodeId};

/// Arena-backed dependency tree.
///
/// All nodes of one tree live in a single flat vector and refer to each
/// other by `NodeId` (an index), so a tree is one allocation graph with no
/// reference cycles and no possibility of pointing into another tree.
/// A tree always owns at least its root node, which carries the sentinel
/// coordinate and stays at index 0.
///
/// Insertion order guarantees that a parent's index is always smaller than
/// the indices of its children; `refresh_descendant_counts` relies on this
/// to run as a single reverse pass instead of a recursive walk.
#[derive(Debug, Clone)]
pub struct DepTree {
    nodes: Vec<DepNode>,
}

impl DepTree {
    /// Creates a tree containing only the root sentinel node.
    pub fn new() -> Self {
        let mut root = DepNode::new(Coordinate::root(), "", "");
        root.attach(NodeId::new(0), None, 0);
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Inserts `node` as the last child of `parent` and returns its id.
    ///
    /// The node's id, parent link and depth (parent depth + 1) are assigned
    /// here; whatever the caller set for them is overwritten.
    ///
    /// # Panics
    /// Panics if `parent` was not issued by this tree. Ids are only valid
    /// for the arena that created them.
    pub fn push_child(&mut self, parent: NodeId, mut node: DepNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let depth = self.nodes[parent.index()].depth() + 1;
        node.attach(id, Some(parent), depth);
        self.nodes.push(node);
        self.nodes[parent.index()].push_child_id(id);
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &DepNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut DepNode {
        &mut self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.index()].children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Pre-order traversal (root first, children in insertion order),
    /// driven by an explicit stack so arbitrarily deep trees cannot
    /// overflow the call stack.
    pub fn iter_preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// The chain of nodes from the topmost non-root ancestor down to `id`
    /// itself. Nodes carrying the root sentinel coordinate are skipped, so
    /// the chain of the root is empty.
    pub fn ancestor_chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if !node.is_root() {
                chain.push(node_id);
            }
            current = node.parent();
        }
        chain.reverse();
        chain
    }

    /// Recomputes every node's descendant count.
    ///
    /// Children always sit at higher indices than their parent, so walking
    /// the arena from the end yields children before parents; each node's
    /// count is the sum of `1 + count(child)` over its children. Must be
    /// called again after any operation that changes the tree's shape.
    pub fn refresh_descendant_counts(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            let total: usize = self.nodes[index]
                .children()
                .iter()
                .map(|child| 1 + self.nodes[child.index()].descendant_count())
                .sum();
            self.nodes[index].set_descendant_count(total);
        }
    }
}

impl Default for DepTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit-stack pre-order iterator over a `DepTree`.
pub struct Preorder<'a> {
    tree: &'a DepTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
