//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the project root.
#[derive(Debug, Error)]
pub enum PathError {
    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// The path could not be canonicalized (usually because it does not exist).
    #[error("Cannot resolve {path}: {reason}")]
    Unresolvable { path: PathBuf, reason: String },

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
