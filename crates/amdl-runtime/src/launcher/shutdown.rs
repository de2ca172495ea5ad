//! Child termination: SIGTERM, then SIGKILL once the grace period lapses.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::Child;

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Stop `child` and reap it.
///
/// On Unix the child first gets SIGTERM and `grace` to exit; a child that is
/// still running afterwards is killed. Elsewhere it is killed immediately.
pub async fn terminate_child(child: &mut Child, grace: Duration) -> io::Result<ExitStatus> {
    #[cfg(unix)]
    {
        let Some(pid) = child.id() else {
            // Already reaped
            return child.wait().await;
        };
        let pid = i32::try_from(pid).map_err(io::Error::other)?;

        match signal::kill(Pid::from_raw(pid), Signal::SIGTERM) {
            Ok(()) => {}
            Err(nix::errno::Errno::ESRCH) => return child.wait().await,
            Err(e) => return Err(io::Error::other(e)),
        }

        if let Ok(status) = tokio::time::timeout(grace, child.wait()).await {
            return status;
        }
    }

    #[cfg(not(unix))]
    let _ = grace;

    child.kill().await?;
    child.wait().await
}
