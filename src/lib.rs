//! gradle-depdiff - Dependency diff tool for Gradle dependency reports
//!
//! This library parses textual Gradle dependency-tree reports, diffs two
//! report snapshots against each other, and detects forced version updates,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`tree_diff`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gradle_depdiff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let report_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = DiffReportsUseCase::new(report_reader, progress_reporter);
//!
//! // Execute
//! let request = DiffRequest::new(
//!     PathBuf::from("deps-new.txt"),
//!     Some(PathBuf::from("deps-old.txt")),
//!     vec![],
//! );
//! let response = use_case.execute(request)?;
//!
//! // Build the read model and format output
//! let model = DiffReadModelBuilder::build(&response, &ViewOptions::default());
//! let formatter = TextFormatter::new();
//! let output = formatter.format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tree_diff;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{DiffRequest, DiffResponse, OutputFormat};
    pub use crate::application::read_models::{DiffReadModel, DiffReadModelBuilder, ViewOptions};
    pub use crate::application::use_cases::DiffReportsUseCase;
    pub use crate::ports::outbound::{
        DiffFormatter, OutputPresenter, ProgressReporter, ReportReader,
    };
    pub use crate::shared::Result;
    pub use crate::tree_diff::domain::{
        ChangeStatus, Coordinate, DepNode, DepTree, NodeId, ReportMetadata,
    };
    pub use crate::tree_diff::services::{
        DiffEngine, ForcedUpdateScanner, NodeIndexer, PathResolver, ReportParser,
    };
}
