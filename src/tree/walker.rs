//! TreeWalker - builds the full tree in memory

use std::fs;
use std::path::Path;

use glob::Pattern;

use crate::error::{BoughError, BoughResult};

use super::config::WalkerConfig;
use super::node::TreeNode;
use super::utils::{compile_patterns, should_ignore_path};

/// Build a tree with the default configuration.
pub fn build_tree(path: impl AsRef<Path>) -> BoughResult<TreeNode> {
    TreeWalker::new(WalkerConfig::default()).walk(path.as_ref())
}

/// Recursive-descent tree builder. The only component that touches the
/// filesystem, and it only ever reads it.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the subtree rooted at `root`.
    ///
    /// Fails if `root` does not exist or an ignore pattern is malformed.
    /// Everything below the root is recoverable: an unreadable directory is
    /// marked on its node and the walk continues.
    pub fn walk(&self, root: &Path) -> BoughResult<TreeNode> {
        let patterns = compile_patterns(&self.config.ignore_patterns)?;

        // symlink_metadata so a dangling symlink root still counts as
        // existing; it becomes a leaf like any other symlink.
        if root.symlink_metadata().is_err() {
            return Err(BoughError::NotFound(root.to_path_buf()));
        }

        Ok(self.walk_path(root, &patterns, 0))
    }

    fn walk_path(&self, path: &Path, patterns: &[Pattern], depth: usize) -> TreeNode {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        // Symlinks are leaves labeled by their own name, never dereferenced,
        // so link cycles cannot occur. Anything that is not a directory
        // (regular file, socket, fifo) bottoms out the recursion here.
        if path.is_symlink() || !path.is_dir() {
            return TreeNode::file(name);
        }

        let mut node = TreeNode::dir(name);

        // At the depth limit the directory is shown but not entered.
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return node;
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(_) => {
                node.readable = false;
                return node;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let entry_path = entry.path();

            if should_ignore_path(&entry_path, patterns) {
                continue;
            }
            if self.config.dirs_only && (entry_path.is_symlink() || !entry_path.is_dir()) {
                continue;
            }

            node.add_child(self.walk_path(&entry_path, patterns, depth + 1));
        }

        node
    }
}
