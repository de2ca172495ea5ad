//! Server launcher port.
//!
//! The launch is the terminal step of the bootstrap: once `launch` is called,
//! the delegated server owns the foreground until it exits.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Everything needed to start the delegated server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Variables set on top of the inherited environment.
    pub env: Vec<(String, OsString)>,
}

impl LaunchSpec {
    /// Look up a variable this spec overrides.
    pub fn env_var(&self, key: &str) -> Option<&OsStr> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }
}

/// How the delegated server ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The server exited on its own. `code` is `None` when killed by a signal.
    Exited { code: Option<i32> },
    /// The operator interrupted the launcher and the server was shut down.
    Interrupted,
}

impl LaunchOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Exited { code: Some(0) } | Self::Interrupted)
    }

    /// Process exit code the launcher should finish with.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Exited { code: Some(code) } => *code,
            Self::Exited { code: None } => 1,
            Self::Interrupted => 0,
        }
    }
}

/// Errors starting the delegated server.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The web application directory does not exist.
    #[error("Web application directory not found: {0}")]
    MissingWorkingDir(PathBuf),

    /// The server process could not be spawned.
    #[error("Failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// Waiting on the running server failed.
    #[error("Lost track of server process: {0}")]
    Wait(String),
}

/// Port for handing control to the delegated server.
#[async_trait]
pub trait ServerLauncher: Send + Sync {
    /// Start the server and block until it exits.
    async fn launch(&self, spec: LaunchSpec) -> Result<LaunchOutcome, LaunchError>;
}
