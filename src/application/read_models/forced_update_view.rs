//! Forced update view structs for the diff read model

/// View representation of one forced update, aggregated per coordinate
///
/// A forced update is a dependency whose declared version was overridden
/// by Gradle's conflict resolution (rendered as `1.0.0 -> 1.2.0` in the
/// report). All occurrences of the same coordinate collapse into one view.
#[derive(Debug, Clone)]
pub struct ForcedUpdateView {
    /// Coordinate in `group:artifact` form
    pub coordinate: String,
    /// Version Gradle settled on across all occurrences
    pub resolved: String,
    /// Distinct declared versions, sorted lexicographically
    pub declared_variants: Vec<String>,
    /// Number of tree positions where the coordinate was forced
    pub occurrence_count: usize,
    /// Sorted dependency paths leading to the forced occurrences
    pub paths: Vec<String>,
}
