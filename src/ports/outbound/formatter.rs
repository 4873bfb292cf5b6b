use crate::application::read_models::DiffReadModel;
use crate::shared::Result;

/// DiffFormatter port for formatting diff output
///
/// This port abstracts the formatting logic for the different output
/// formats (plain text, JSON, Markdown).
pub trait DiffFormatter {
    /// Formats diff output using the unified read model
    ///
    /// # Arguments
    /// * `model` - The diff read model containing metadata, the result tree,
    ///   the change summary and forced-update information
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &DiffReadModel) -> Result<String>;
}
