use crate::tree_diff::domain::{ChangeStatus, Coordinate, DepNode, DepTree, NodeId};
use indexmap::IndexMap;

/// DiffEngine service merging an old and a new dependency tree
///
/// The merged tree is a brand-new arena; input trees are read but never
/// referenced by the result. Matching is positional only in the sense of
/// sibling order: children are paired by coordinate within their parent,
/// never across different parents. Either input may be absent, in which
/// case the merge degrades to a straight copy of the present side with
/// every node marked `added` (new only) or `removed` (old only).
pub struct DiffEngine;

struct MergeTask {
    old: Option<NodeId>,
    new: Option<NodeId>,
    merged_parent: NodeId,
}

impl DiffEngine {
    /// Merges two trees into one annotated tree.
    ///
    /// # Arguments
    /// * `old` - The baseline tree, if any
    /// * `new` - The current tree, if any
    ///
    /// # Returns
    /// A tree covering every node of both inputs. Node content (coordinate
    /// and versions) prefers the new side; nodes present on both sides also
    /// carry the old side's versions as `prev_*`. Every node has a status.
    /// New-side children keep their order, followed by old-only children in
    /// old order. Descendant counts are recomputed before returning.
    pub fn merge(old: Option<&DepTree>, new: Option<&DepTree>) -> DepTree {
        let mut merged = DepTree::new();
        let merged_root = merged.root();

        let old_root = old.map(|tree| tree.node(tree.root()));
        let new_root = new.map(|tree| tree.node(tree.root()));
        merged
            .node_mut(merged_root)
            .set_status(Some(Self::classify(old_root, new_root)));
        if let (Some(old_node), Some(_)) = (old_root, new_root) {
            merged.node_mut(merged_root).set_previous_versions(
                Some(old_node.declared_version().to_string()),
                Some(old_node.resolved_version().to_string()),
            );
        }

        let mut tasks: Vec<MergeTask> = Vec::new();
        Self::push_child_tasks(
            &mut tasks,
            old,
            old.map(|tree| tree.root()),
            new,
            new.map(|tree| tree.root()),
            merged_root,
        );

        // Depth-first so the arena fills in pre-order, parents before
        // children; ids come out deterministic for identical inputs.
        while let Some(task) = tasks.pop() {
            let old_node = match (old, task.old) {
                (Some(tree), Some(id)) => Some(tree.node(id)),
                _ => None,
            };
            let new_node = match (new, task.new) {
                (Some(tree), Some(id)) => Some(tree.node(id)),
                _ => None,
            };
            let primary = new_node
                .or(old_node)
                .expect("a merge task references at least one side");

            let mut node = DepNode::new(
                primary.coordinate().clone(),
                primary.declared_version(),
                primary.resolved_version(),
            )
            .with_status(Self::classify(old_node, new_node));
            if let (Some(old_side), Some(_)) = (old_node, new_node) {
                node = node.with_previous_versions(
                    old_side.declared_version(),
                    old_side.resolved_version(),
                );
            }

            let merged_id = merged.push_child(task.merged_parent, node);
            Self::push_child_tasks(&mut tasks, old, task.old, new, task.new, merged_id);
        }

        merged.refresh_descendant_counts();
        merged
    }

    fn classify(old_node: Option<&DepNode>, new_node: Option<&DepNode>) -> ChangeStatus {
        match (old_node, new_node) {
            (None, Some(_)) => ChangeStatus::Added,
            (Some(_), None) => ChangeStatus::Removed,
            (Some(old_side), Some(new_side)) => {
                if old_side.declared_version() != new_side.declared_version()
                    || old_side.resolved_version() != new_side.resolved_version()
                {
                    ChangeStatus::Changed
                } else {
                    ChangeStatus::Unchanged
                }
            }
            (None, None) => ChangeStatus::Unchanged,
        }
    }

    /// Pairs the children of one old/new node pair by coordinate and queues
    /// a task per pairing, reversed so the depth-first loop visits them in
    /// display order.
    fn push_child_tasks(
        tasks: &mut Vec<MergeTask>,
        old_tree: Option<&DepTree>,
        old_id: Option<NodeId>,
        new_tree: Option<&DepTree>,
        new_id: Option<NodeId>,
        merged_parent: NodeId,
    ) {
        let old_children = Self::children_by_coordinate(old_tree, old_id);
        let new_children = Self::children_by_coordinate(new_tree, new_id);

        let mut ordered: Vec<(Option<NodeId>, Option<NodeId>)> = Vec::new();
        for (coordinate, &new_child) in &new_children {
            ordered.push((old_children.get(coordinate).copied(), Some(new_child)));
        }
        for (coordinate, &old_child) in &old_children {
            if !new_children.contains_key(coordinate) {
                ordered.push((Some(old_child), None));
            }
        }

        for (old_child, new_child) in ordered.into_iter().rev() {
            tasks.push(MergeTask {
                old: old_child,
                new: new_child,
                merged_parent,
            });
        }
    }

    /// Duplicate sibling coordinates collapse to one entry: the first
    /// occurrence keeps its position, the last occurrence provides the node.
    fn children_by_coordinate(
        tree: Option<&DepTree>,
        id: Option<NodeId>,
    ) -> IndexMap<Coordinate, NodeId> {
        let mut map = IndexMap::new();
        if let (Some(tree), Some(id)) = (tree, id) {
            for &child in tree.children(id) {
                map.insert(tree.node(child).coordinate().clone(), child);
            }
        }
        map
    }
}
