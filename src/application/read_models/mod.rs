//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide a denormalized
//! representation of the merged dependency tree for the output formatters.

pub mod diff_read_model;
pub mod diff_read_model_builder;
pub mod forced_update_view;
pub mod node_view;

pub use diff_read_model::{DiffReadModel, MetadataView};
pub use diff_read_model_builder::{DiffReadModelBuilder, ViewOptions};
pub use forced_update_view::ForcedUpdateView;
pub use node_view::{ChangeSummary, NodeView, StatusView};
