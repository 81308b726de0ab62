//! Shared utility functions for tree walking

use std::path::Path;

use glob::Pattern;

use crate::error::{BoughError, BoughResult};

/// Compile ignore patterns up front so a malformed pattern fails the call
/// instead of silently never matching.
pub fn compile_patterns(patterns: &[String]) -> BoughResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(|_| BoughError::InvalidPattern(p.clone())))
        .collect()
}

/// Check if a path should be skipped based on its base name and the
/// user-supplied ignore patterns. With no patterns nothing is skipped,
/// hidden entries included.
pub fn should_ignore_path(path: &Path, patterns: &[Pattern]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    patterns.iter().any(|p| p.matches(&name))
}
