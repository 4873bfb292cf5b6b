use crate::application::dto::{DiffRequest, DiffResponse};
use crate::shared::Result;
use std::path::Path;

/// TreeDiffPort - Inbound port for the report diffing use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger report parsing and diffing. It represents the
/// application's public API.
pub trait TreeDiffPort {
    /// Parses the requested reports and produces the annotated result tree
    ///
    /// # Arguments
    /// * `request` - Request parameters containing report paths and options
    ///
    /// # Returns
    /// A response containing the result tree, its coordinate index, the
    /// forced-update scan and report metadata
    ///
    /// # Errors
    /// Returns an error if:
    /// - A report file cannot be read
    /// - An exclusion pattern is invalid
    /// - Exclusion patterns remove every dependency from the new report
    fn diff_reports(&self, request: DiffRequest) -> Result<DiffResponse>;

    /// Validates a report file path
    ///
    /// # Arguments
    /// * `path` - Path to validate
    ///
    /// # Returns
    /// Success if the path points to a readable report file
    ///
    /// # Errors
    /// Returns an error if the path is missing, is a symbolic link, is not
    /// a regular file or exceeds the size limit
    fn validate_report_path(&self, path: &Path) -> Result<()>;
}
