use crate::ports::outbound::ReportReader;
use crate::shared::error::DepdiffError;
use crate::shared::security::{validate_readable_report, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading dependency reports from disk
///
/// This adapter implements the ReportReader port. Every read goes through
/// the shared security checks: symlink rejection, regular-file check and
/// the report size cap.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DepdiffError::ReportNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The dependency report \"{}\" does not exist.\n   \
                     Capture one with 'gradle dependencies --configuration runtimeClasspath > deps.txt' \
                     and pass its path.",
                    path.display()
                ),
            }
            .into());
        }

        validate_readable_report(path, MAX_REPORT_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            DepdiffError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
