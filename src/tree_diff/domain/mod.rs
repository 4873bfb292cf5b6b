pub mod coordinate;
pub mod dep_node;
pub mod dep_tree;
pub mod forced_update;
pub mod report_metadata;

pub use coordinate::{Coordinate, PROJECT_VERSION};
pub use dep_node::{ChangeStatus, DepNode, NodeId};
pub use dep_tree::{DepTree, Preorder};
pub use forced_update::ForcedUpdateInfo;
pub use report_metadata::ReportMetadata;
