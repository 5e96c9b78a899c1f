//! Tree node types

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Whether a node is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// How much of a directory's contents were listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirState {
    /// Contents were read and filtered.
    #[default]
    Listed,
    /// Depth bound reached; contents were not read.
    Truncated,
    /// Contents could not be read.
    Unreadable { error: String },
}

impl DirState {
    pub fn is_listed(&self) -> bool {
        matches!(self, DirState::Listed)
    }
}

/// One visible filesystem entry.
///
/// Directories own their children, which are stored in display order.
/// `Truncated` and `Unreadable` directories always have no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
        #[serde(skip_serializing_if = "DirState::is_listed")]
        state: DirState,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            children,
            state: DirState::Listed,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::File { .. } => NodeKind::File,
            TreeNode::Dir { .. } => NodeKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children.as_slice(),
        }
    }

    /// Directory listing state, `None` for files.
    pub fn state(&self) -> Option<&DirState> {
        match self {
            TreeNode::File { .. } => None,
            TreeNode::Dir { state, .. } => Some(state),
        }
    }

    /// Visit every node below this one in pre-order.
    pub fn descendants(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// Unreadable directories below this node, as paths under `base` paired
    /// with the listing error.
    pub fn unreadable_dirs(&self, base: &Path) -> Vec<(PathBuf, &str)> {
        let mut out = Vec::new();
        collect_unreadable(self, base, &mut out);
        out
    }
}

fn collect_unreadable<'a>(node: &'a TreeNode, base: &Path, out: &mut Vec<(PathBuf, &'a str)>) {
    for child in node.children() {
        let path = base.join(child.name());
        if let Some(DirState::Unreadable { error }) = child.state() {
            out.push((path.clone(), error.as_str()));
        }
        collect_unreadable(child, &path, out);
    }
}

fn collect_descendants<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    for child in node.children() {
        out.push(child);
        collect_descendants(child, out);
    }
}
