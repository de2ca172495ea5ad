//! Bootstrap error taxonomy and exit-code mapping.
//!
//! Every variant is fatal: the CLI reports it and exits with `exit_code()`.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;
use crate::ports::{FetchError, LaunchError};

/// Errors that stop the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Project root could not be resolved.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// One or more required runtime dependencies are missing.
    #[error("Missing required dependencies: {}", .missing.join(", "))]
    MissingDependencies {
        missing: Vec<String>,
        hints: Vec<String>,
    },

    /// The externally-built wrapper binary or rootfs is absent.
    #[error("Wrapper binary/rootfs not found: {}", display_paths(.missing))]
    WrapperMissing {
        wrapper_dir: PathBuf,
        missing: Vec<PathBuf>,
    },

    /// Cloning the downloader repository failed.
    #[error("Failed to clone {url} into {}: {source}", .target.display())]
    CloneFailed {
        url: String,
        target: PathBuf,
        #[source]
        source: FetchError,
    },

    /// The launch environment could not be composed.
    #[error("Failed to prepare environment: {0}")]
    Environment(String),

    /// The delegated server could not be started.
    #[error("Failed to start web app: {0}")]
    LaunchFailed(#[from] LaunchError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl BootstrapError {
    /// Map error to an exit code (sysexits.h categories).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Path(_) => 78,                   // EX_CONFIG
            Self::MissingDependencies { .. } => 69, // EX_UNAVAILABLE
            Self::WrapperMissing { .. } => 66,     // EX_NOINPUT
            Self::CloneFailed { .. } => 75,        // EX_TEMPFAIL
            Self::Environment(_) => 71,            // EX_OSERR
            Self::LaunchFailed(_) => 70,           // EX_SOFTWARE
        }
    }

    /// Operator-facing remediation lines.
    pub fn hint(&self) -> Vec<String> {
        match self {
            Self::Path(_) => vec![
                "Pass --project-root or set AMDL_PROJECT_ROOT to the project checkout.".to_string(),
            ],
            Self::MissingDependencies { hints, .. } => hints.clone(),
            Self::WrapperMissing { wrapper_dir, .. } => vec![format!(
                "Please build the wrapper in {} (e.g., ./scripts/build.sh) before launching.",
                wrapper_dir.display()
            )],
            Self::CloneFailed { target, .. } => vec![format!(
                "Check network access and git, then remove any partial clone at {} and retry.",
                target.display()
            )],
            Self::Environment(_) => Vec::new(),
            Self::LaunchFailed(_) => vec![
                "Ensure the web app dependencies are installed (cd apps/web && bun install)."
                    .to_string(),
            ],
        }
    }
}
