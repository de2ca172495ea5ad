//! Delegated server launch as a child process.
//!
//! The launcher spawns the web server with the composed environment and
//! blocks until it exits. Ctrl-C shuts the child down before returning.

mod shutdown;

use std::process::Stdio;
use std::time::Duration;

use amdl_core::ports::{LaunchError, LaunchOutcome, LaunchSpec, ServerLauncher};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub use shutdown::terminate_child;

/// Grace period between SIGTERM and SIGKILL on interrupt.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Runs the delegated server as a foreground child process.
#[derive(Debug, Clone)]
pub struct ProcessServerLauncher {
    shutdown_grace: Duration,
}

impl ProcessServerLauncher {
    pub const fn new() -> Self {
        Self {
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }

    #[must_use]
    pub const fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }
}

impl Default for ProcessServerLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServerLauncher for ProcessServerLauncher {
    async fn launch(&self, spec: LaunchSpec) -> Result<LaunchOutcome, LaunchError> {
        if !spec.working_dir.is_dir() {
            return Err(LaunchError::MissingWorkingDir(spec.working_dir));
        }

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.working_dir)
            .envs(spec.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .kill_on_drop(true);

        debug!(
            "Spawning {} {} in {}",
            spec.program,
            spec.args.join(" "),
            spec.working_dir.display()
        );

        let mut child = cmd.spawn().map_err(|e| LaunchError::Spawn {
            program: spec.program.clone(),
            reason: e.to_string(),
        })?;
        info!("Web server started (pid {:?})", child.id());

        // Ctrl-C wins when the child also exits on the terminal SIGINT
        let exited = tokio::select! {
            biased;
            // A failed signal registration disables this branch
            Ok(()) = tokio::signal::ctrl_c() => None,
            status = child.wait() => Some(status),
        };

        match exited {
            Some(status) => {
                let status = status.map_err(|e| LaunchError::Wait(e.to_string()))?;
                debug!("Web server exited: {}", status);
                Ok(LaunchOutcome::Exited {
                    code: status.code(),
                })
            }
            None => {
                info!("Interrupt received, stopping web server");
                if let Err(e) = terminate_child(&mut child, self.shutdown_grace).await {
                    warn!("Failed to stop web server cleanly: {}", e);
                }
                Ok(LaunchOutcome::Interrupted)
            }
        }
    }
}
