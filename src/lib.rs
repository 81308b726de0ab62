//! Bough - a tree command with a clean in-memory model

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{BoughError, BoughResult};
pub use output::{OutputConfig, TreeFormatter, print_json, render_tree};
pub use tree::{TreeNode, TreeWalker, WalkerConfig, build_tree};
