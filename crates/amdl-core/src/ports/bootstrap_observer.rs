//! Observer for bootstrap progress.
//!
//! The sequence reports each decision through this trait so that adapters can
//! render progress however they like. Core itself never prints.

use std::path::PathBuf;

use crate::environment::PermissionChange;

/// A single step outcome in the bootstrap sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    DependenciesSatisfied { present: usize, total: usize },
    WrapperPresent { binary: PathBuf },
    DownloaderPresent { path: PathBuf },
    CloneStarted { url: String, target: PathBuf },
    CloneCompleted { target: PathBuf },
    EnvironmentComposed {
        wrapper_dir: PathBuf,
        permissions: PermissionChange,
    },
    LaunchStarting { program: String, host: String, port: u16 },
}

/// Receives bootstrap events in order.
pub trait BootstrapObserver: Send + Sync {
    fn on_event(&self, event: &BootstrapEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BootstrapObserver for NoopObserver {
    fn on_event(&self, _event: &BootstrapEvent) {}
}
