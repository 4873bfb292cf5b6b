use chrono::Utc;

/// ReportMetadata value object stamped onto every diff result
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(generated_at: String, tool_name: String, tool_version: String) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
        }
    }

    /// Metadata for a run happening now, with an RFC 3339 UTC timestamp.
    pub fn generated_now(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "gradle-depdiff".to_string(),
            "0.2.0".to_string(),
        );

        assert_eq!(metadata.generated_at(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "gradle-depdiff");
        assert_eq!(metadata.tool_version(), "0.2.0");
    }

    #[test]
    fn test_generated_now_produces_parseable_timestamp() {
        let metadata = ReportMetadata::generated_now("gradle-depdiff", "0.2.0");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.generated_at()).is_ok());
        assert_eq!(metadata.tool_name(), "gradle-depdiff");
    }
}
