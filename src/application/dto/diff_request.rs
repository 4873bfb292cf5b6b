use std::path::PathBuf;

/// DiffRequest - Internal request DTO for the report diffing use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external API request.
#[derive(Debug, Clone)]
pub struct DiffRequest {
    /// Path to the new (current) dependency report
    pub new_report_path: PathBuf,
    /// Path to the old (baseline) report; `None` disables diffing
    pub old_report_path: Option<PathBuf>,
    /// Patterns for excluding coordinates from both trees
    pub exclude_patterns: Vec<String>,
}

impl DiffRequest {
    pub fn new(
        new_report_path: PathBuf,
        old_report_path: Option<PathBuf>,
        exclude_patterns: Vec<String>,
    ) -> Self {
        Self {
            new_report_path,
            old_report_path,
            exclude_patterns,
        }
    }
}
