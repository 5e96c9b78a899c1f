//! Directory tree walking logic
//!
//! - `filter`: per-entry visibility (hidden names, include/exclude patterns)
//! - `walker`: builds the filtered `TreeNode` tree from the filesystem

mod config;
mod filter;
mod node;
mod walker;

pub use config::FilterConfig;
pub use filter::{Matcher, compile_pattern, is_hidden, is_visible};
pub use node::{DirState, NodeKind, TreeNode};
pub use walker::{DirLister, FsLister, ListedEntry, TreeWalker, build, root_name};
