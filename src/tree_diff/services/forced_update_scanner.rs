use crate::tree_diff::domain::{Coordinate, DepTree, ForcedUpdateInfo, NodeId};
use crate::tree_diff::services::path_resolver::{PathResolver, PATH_SEPARATOR};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Result of scanning a tree for forced updates.
///
/// `forced_updates` only has entries for coordinates with at least one
/// forced occurrence; `coordinate_paths` covers every non-root coordinate,
/// forced or not, with the deduplicated canonical paths of all its
/// occurrences.
#[derive(Debug, Clone)]
pub struct ForcedUpdateScan {
    forced_updates: IndexMap<Coordinate, ForcedUpdateInfo>,
    coordinate_paths: IndexMap<Coordinate, BTreeSet<String>>,
}

impl ForcedUpdateScan {
    pub fn forced_updates(&self) -> &IndexMap<Coordinate, ForcedUpdateInfo> {
        &self.forced_updates
    }

    pub fn get(&self, coordinate: &Coordinate) -> Option<&ForcedUpdateInfo> {
        self.forced_updates.get(coordinate)
    }

    pub fn coordinate_paths(&self) -> &IndexMap<Coordinate, BTreeSet<String>> {
        &self.coordinate_paths
    }

    pub fn paths_of(&self, coordinate: &Coordinate) -> Option<&BTreeSet<String>> {
        self.coordinate_paths.get(coordinate)
    }

    pub fn is_empty(&self) -> bool {
        self.forced_updates.is_empty()
    }

    pub fn forced_coordinate_count(&self) -> usize {
        self.forced_updates.len()
    }
}

/// ForcedUpdateScanner service aggregating version overrides across a tree
///
/// A single pre-order pass maintains the live chain of rendered path
/// segments; nodes carrying the root sentinel coordinate are transparent
/// (excluded from paths and indices, their children still visited). For a
/// coordinate forced in several places, the recorded resolved version is
/// the one of the occurrence met last.
pub struct ForcedUpdateScanner;

impl ForcedUpdateScanner {
    pub fn scan(tree: &DepTree) -> ForcedUpdateScan {
        let mut forced_updates: IndexMap<Coordinate, ForcedUpdateInfo> = IndexMap::new();
        let mut coordinate_paths: IndexMap<Coordinate, BTreeSet<String>> = IndexMap::new();

        // (node, number of path segments above it)
        let mut stack: Vec<(NodeId, usize)> = vec![(tree.root(), 0)];
        let mut segments: Vec<String> = Vec::new();

        while let Some((id, base_len)) = stack.pop() {
            segments.truncate(base_len);
            let node = tree.node(id);

            let mut child_base = base_len;
            if !node.is_root() {
                segments.push(PathResolver::segment(node));
                child_base = base_len + 1;

                let path = segments.join(PATH_SEPARATOR);
                if node.is_forced_update() {
                    forced_updates
                        .entry(node.coordinate().clone())
                        .or_insert_with(ForcedUpdateInfo::new)
                        .record(
                            node.declared_version(),
                            node.resolved_version(),
                            id,
                            path.clone(),
                        );
                }
                coordinate_paths
                    .entry(node.coordinate().clone())
                    .or_default()
                    .insert(path);
            }

            for &child in tree.children(id).iter().rev() {
                stack.push((child, child_base));
            }
        }

        ForcedUpdateScan {
            forced_updates,
            coordinate_paths,
        }
    }
}
