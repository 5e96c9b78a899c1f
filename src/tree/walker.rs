//! TreeWalker - builds the filtered tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AccessError, PathError, Result};

use super::config::FilterConfig;
use super::filter::is_visible;
use super::node::{DirState, TreeNode};

/// Build the filtered tree rooted at `root`.
pub fn build(root: &Path, config: &FilterConfig) -> Result<TreeNode> {
    TreeWalker::new(config).walk(root)
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Source of directory listings.
///
/// A listing either succeeds completely or fails; an entry that cannot be
/// read must fail the whole listing so the directory shows as unreadable.
pub trait DirLister {
    fn list(&self, path: &Path) -> io::Result<Vec<ListedEntry>>;
}

/// Lists directories from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<ListedEntry>> {
        fs::read_dir(path)?
            .map(|entry| -> io::Result<ListedEntry> {
                let entry = entry?;
                let path = entry.path();
                // file_type does not follow symlinks; neither does symlink_metadata
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(_) => fs::symlink_metadata(&path)?.file_type(),
                };
                Ok(ListedEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    is_dir: file_type.is_dir(),
                })
            })
            .collect()
    }
}

/// Depth-first directory walker.
///
/// Siblings are ordered by name, files and directories interleaved.
/// Symbolic links are listed as files and never descended.
pub struct TreeWalker<'a, L = FsLister> {
    config: &'a FilterConfig,
    lister: L,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            lister: FsLister,
        }
    }
}

impl<'a, L: DirLister> TreeWalker<'a, L> {
    pub fn with_lister(config: &'a FilterConfig, lister: L) -> Self {
        Self { config, lister }
    }

    /// Walk `root` and return its node.
    ///
    /// A missing or non-directory root is a `PathError`. An unreadable root
    /// is an `AccessError`; unreadable directories below it are kept in the
    /// tree as `DirState::Unreadable` instead.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        if !root.exists() {
            return Err(PathError::NotFound(root.to_path_buf()).into());
        }
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root.to_path_buf()).into());
        }

        let children = self.walk_dir(root, 0)?;
        Ok(TreeNode::dir(root_name(root), children))
    }

    fn walk_dir(
        &self,
        path: &Path,
        depth: usize,
    ) -> std::result::Result<Vec<TreeNode>, AccessError> {
        let mut children = Vec::new();

        for entry in self.read_sorted_entries(path)? {
            if !is_visible(&entry.name, entry.is_dir, self.config) {
                continue;
            }

            if !entry.is_dir {
                children.push(TreeNode::file(entry.name));
                continue;
            }

            let node = if self.config.at_max_depth(depth) {
                TreeNode::Dir {
                    name: entry.name,
                    children: Vec::new(),
                    state: DirState::Truncated,
                }
            } else {
                match self.walk_dir(&entry.path, depth + 1) {
                    Ok(grandchildren) => TreeNode::dir(entry.name, grandchildren),
                    Err(err) => TreeNode::Dir {
                        name: entry.name,
                        children: Vec::new(),
                        state: DirState::Unreadable {
                            error: err.source.to_string(),
                        },
                    },
                }
            };
            children.push(node);
        }

        Ok(children)
    }

    /// List and sort a directory's entries.
    ///
    /// The listing is fully collected before this returns, so no directory
    /// handle stays open across the recursion.
    fn read_sorted_entries(
        &self,
        path: &Path,
    ) -> std::result::Result<Vec<ListedEntry>, AccessError> {
        let mut entries = self.lister.list(path).map_err(|source| AccessError {
            path: path.to_path_buf(),
            source,
        })?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Base name of `root`, resolving `.` and `..` when possible.
pub fn root_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| root.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
