//! Repository fetcher port.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a repository fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetch program could not be started (e.g. git not installed).
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The fetch program ran and exited unsuccessfully.
    #[error("{program} failed ({status})")]
    Exit {
        program: String,
        status: String,
        code: Option<i32>,
    },

    /// Filesystem preparation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for materialising a remote repository into a local directory.
///
/// Implementations must only report success once `target` exists with the
/// fetched content. A failed fetch may leave a partial `target` behind.
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    async fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError>;
}
