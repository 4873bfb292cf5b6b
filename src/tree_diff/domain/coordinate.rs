/// Sentinel coordinate carried by every tree's root node.
const ROOT_COORDINATE: &str = "root:root";

/// Sentinel version used for Gradle project references (`project :app`),
/// which have no resolvable version of their own.
pub const PROJECT_VERSION: &str = "project";

/// NewType wrapper for a `group:artifact` coordinate.
///
/// Coordinates are extracted from report lines on a best-effort basis, so
/// construction never fails; malformed lines simply produce whatever token
/// the classifier could salvage (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate(String);

impl Coordinate {
    pub fn new(coordinate: impl Into<String>) -> Self {
        Self(coordinate.into())
    }

    /// The sentinel coordinate of a tree root.
    pub fn root() -> Self {
        Self(ROOT_COORDINATE.to_string())
    }

    /// Coordinate for a Gradle project reference, e.g. `project:core`.
    pub fn for_project(name: &str) -> Self {
        Self(format!("project:{}", name))
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_COORDINATE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The group half of the coordinate (text before the first `:`),
    /// or the whole string when no separator is present.
    pub fn group(&self) -> &str {
        match self.0.split_once(':') {
            Some((group, _)) => group,
            None => &self.0,
        }
    }

    /// The artifact half of the coordinate (text after the first `:`),
    /// or empty when no separator is present.
    pub fn artifact(&self) -> &str {
        match self.0.split_once(':') {
            Some((_, artifact)) => artifact,
            None => "",
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
