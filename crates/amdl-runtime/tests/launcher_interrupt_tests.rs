//! Ctrl-C handling of the child-process server launcher.
//!
//! SIGINT is delivered to the whole test binary, so this lives apart from the
//! other launcher tests.

#![cfg(unix)]

use std::time::{Duration, Instant};

use amdl_core::ports::{LaunchOutcome, LaunchSpec, ServerLauncher};
use amdl_runtime::ProcessServerLauncher;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tempfile::tempdir;
use tokio::signal::unix::{SignalKind, signal};

#[tokio::test]
async fn test_ctrl_c_stops_server_that_ignores_sigterm() {
    // Replaces the default SIGINT action so the test binary survives
    let _sigint = signal(SignalKind::interrupt()).unwrap();

    let temp = tempdir().unwrap();
    let spec = LaunchSpec {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "trap '' TERM; sleep 30".to_string()],
        working_dir: temp.path().to_path_buf(),
        env: vec![],
    };
    let launcher = ProcessServerLauncher::new().with_shutdown_grace(Duration::from_millis(300));

    let started = Instant::now();
    let handle = tokio::spawn(async move { launcher.launch(spec).await });

    // Resend until the launcher is listening and has stopped the server
    while !handle.is_finished() {
        assert!(
            started.elapsed() < Duration::from_secs(10),
            "launcher never handled the interrupt"
        );
        kill(Pid::this(), Signal::SIGINT).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, LaunchOutcome::Interrupted);
    // SIGKILL after the grace period, well before the sleep would end
    assert!(started.elapsed() < Duration::from_secs(10));
}
