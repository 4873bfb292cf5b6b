use crate::shared::Result;
use crate::tree_diff::domain::{DepNode, DepTree, NodeId};
use std::cell::RefCell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// CoordinateFilter - Prunes subtrees whose coordinate matches an
/// exclusion pattern
///
/// Supports wildcard patterns using '*' to match zero or more characters,
/// e.g. `org.example:*` or `*:annotation`. Patterns are case-sensitive and
/// validated against a character whitelist. Excluding a node removes its
/// entire subtree.
#[derive(Debug)]
pub struct CoordinateFilter {
    patterns: Vec<ExcludePattern>,
}

impl CoordinateFilter {
    /// Creates a new CoordinateFilter from raw pattern strings.
    ///
    /// # Arguments
    /// * `patterns` - Pattern strings (e.g., "org.example:*", "*:lint*")
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, bad characters,
    ///   wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let mut compiled = Vec::new();
        for pattern in patterns {
            compiled.push(ExcludePattern::new(pattern)?);
        }

        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Copies `tree` into a new arena, dropping every subtree whose root
    /// coordinate matches an exclusion pattern. Descendant counts of the
    /// copy are recomputed before returning.
    pub fn prune(&self, tree: &DepTree) -> DepTree {
        if self.patterns.is_empty() {
            return tree.clone();
        }

        let mut pruned = DepTree::new();
        // (source node, parent in the copy)
        let mut stack: Vec<(NodeId, NodeId)> = Vec::new();
        for &child in tree.children(tree.root()).iter().rev() {
            stack.push((child, pruned.root()));
        }

        while let Some((source, target_parent)) = stack.pop() {
            let node = tree.node(source);
            if self.matches(node.coordinate().as_str()) {
                continue;
            }

            let copy = pruned.push_child(
                target_parent,
                DepNode::new(
                    node.coordinate().clone(),
                    node.declared_version(),
                    node.resolved_version(),
                ),
            );
            pruned.node_mut(copy).set_status(node.status());
            pruned.node_mut(copy).set_previous_versions(
                node.prev_declared_version().map(str::to_string),
                node.prev_resolved_version().map(str::to_string),
            );

            for &child in tree.children(source).iter().rev() {
                stack.push((child, copy));
            }
        }

        pruned.refresh_descendant_counts();
        pruned
    }

    /// Checks if a coordinate matches any exclusion pattern
    fn matches(&self, coordinate: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(coordinate))
    }

    /// Returns the patterns that did not match any coordinate.
    ///
    /// Meaningful after pruning; patterns listed here had no effect and
    /// usually indicate a typo.
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: RefCell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, coordinate: &str) -> bool {
        let is_match = self.matcher.matches(coordinate);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "org.example:lib"
    Exact(String),
    /// Leading wildcard: "*:annotation"
    EndsWith(String),
    /// Trailing wildcard: "org.example:*"
    StartsWith(String),
    /// Wildcards on both ends: "*kotlin*"
    Contains(String),
    /// General case: every part must appear, in order
    InOrder(Vec<String>),
}

impl PatternMatcher {
    fn matches(&self, coordinate: &str) -> bool {
        match self {
            PatternMatcher::Exact(pattern) => coordinate == pattern,
            PatternMatcher::EndsWith(suffix) => coordinate.ends_with(suffix),
            PatternMatcher::StartsWith(prefix) => coordinate.starts_with(prefix),
            PatternMatcher::Contains(middle) => coordinate.contains(middle),
            PatternMatcher::InOrder(parts) => {
                let mut position = 0;
                for part in parts {
                    match coordinate[position..].find(part) {
                        Some(found) => position += found + part.len(),
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

/// Checks if a character is valid in an exclusion pattern
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ':' || c == '*'
}

/// Compiles a pattern string into an optimized matcher
fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcards = pattern.matches('*').count();
    if wildcards == 0 {
        return PatternMatcher::Exact(pattern.to_string());
    }

    if wildcards == 2 && pattern.starts_with('*') && pattern.ends_with('*') {
        return PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string());
    }

    if wildcards == 1 {
        if let Some(suffix) = pattern.strip_prefix('*') {
            return PatternMatcher::EndsWith(suffix.to_string());
        }
        if let Some(prefix) = pattern.strip_suffix('*') {
            return PatternMatcher::StartsWith(prefix.to_string());
        }
    }

    let parts: Vec<String> = pattern
        .split('*')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    PatternMatcher::InOrder(parts)
}
