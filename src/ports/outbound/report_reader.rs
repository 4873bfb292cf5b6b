use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading dependency report contents
///
/// This port abstracts the file system operations needed to read
/// a textual dependency report produced by `gradle dependencies`.
pub trait ReportReader {
    /// Reads the report file at the specified path
    ///
    /// # Arguments
    /// * `path` - Path to the report file
    ///
    /// # Returns
    /// The raw content of the report as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file fails the safety checks (symlink, non-regular, oversized)
    fn read_report(&self, path: &Path) -> Result<String>;
}
