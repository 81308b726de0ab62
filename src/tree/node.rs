//! In-memory tree node model

use serde::Serialize;

/// One filesystem entry: a file or a directory plus its children.
///
/// Nodes form a pure owned tree: each node owns its children outright and
/// carries no parent links, so build and render need no cycle handling.
/// `name` is always a base name, never a full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub is_file: bool,
    /// False iff this is a directory whose entries could not be enumerated
    /// (permission denied). Such a node keeps zero children.
    pub readable: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a childless node. Files stay childless; directories gain
    /// children through `add_child` during the build pass.
    pub fn new(name: impl Into<String>, is_file: bool) -> Self {
        Self {
            name: name.into(),
            is_file,
            readable: true,
            children: Vec::new(),
        }
    }

    /// Create a directory node.
    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Append a child. Order is preserved; duplicate sibling names are
    /// permitted. Files never take children.
    pub fn add_child(&mut self, child: TreeNode) {
        debug_assert!(!self.is_file, "file nodes are leaves");
        self.children.push(child);
    }

    /// True iff this node has no children: any file, or an empty directory.
    /// Use `is_file` to tell the two apart.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_dir(&self) -> bool {
        !self.is_file
    }

    /// Total number of nodes in this subtree, including self. Computed from
    /// the in-memory structure alone.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}
