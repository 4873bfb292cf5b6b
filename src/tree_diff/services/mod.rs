mod coordinate_filter;
mod diff_engine;
mod forced_update_scanner;
mod node_indexer;
mod path_resolver;
mod report_parser;
mod subtree_matcher;

pub use coordinate_filter::CoordinateFilter;
pub use diff_engine::DiffEngine;
pub use forced_update_scanner::{ForcedUpdateScan, ForcedUpdateScanner};
pub use node_indexer::{NodeIndex, NodeIndexer};
pub use path_resolver::{PathLookup, PathResolver, PATH_SEPARATOR};
pub use report_parser::ReportParser;
pub use subtree_matcher::SubtreeMatcher;
