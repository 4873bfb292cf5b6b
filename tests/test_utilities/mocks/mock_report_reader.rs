use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gradle_depdiff::prelude::*;

/// Mock ReportReader for testing
pub struct MockReportReader {
    pub reports: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockReportReader {
    pub fn new() -> Self {
        Self {
            reports: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_report(mut self, path: &str, content: &str) -> Self {
        self.reports
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            reports: HashMap::new(),
            should_fail: true,
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock report read failure");
        }
        self.reports
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No mock report registered for {}", path.display()))
    }
}
