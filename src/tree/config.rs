//! Configuration types for tree walking

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend only this many levels; directories at the limit are shown
    /// but not entered.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Glob patterns matched against entry base names. Empty means no
    /// filtering at all: hidden (dot-prefixed) entries are included.
    pub ignore_patterns: Vec<String>,
}
