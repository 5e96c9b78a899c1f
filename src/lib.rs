//! repo4llm - filtered, depth-limited directory trees for LLM context

pub mod error;
pub mod output;
pub mod project;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{AccessError, Error, PathError, PatternError, Result};
pub use output::{Document, DocumentFormatter, OutputConfig, OutputFormat, TreeRenderer, render};
pub use project::project_title;
pub use tree::{
    DirLister, DirState, FilterConfig, FsLister, ListedEntry, NodeKind, TreeNode, TreeWalker, build,
};
