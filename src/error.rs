//! Error types for tree building

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The traversal root is missing or is not a directory.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// A directory exists but its contents could not be listed.
#[derive(Debug, Error)]
#[error("cannot open directory '{}': {source}", path.display())]
pub struct AccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// An include or exclude pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: glob::PatternError,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
