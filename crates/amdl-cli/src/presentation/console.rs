//! Console rendering of bootstrap progress.

use amdl_core::PermissionChange;
use amdl_core::ports::{BootstrapEvent, BootstrapObserver};

/// Prints one line per bootstrap step to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// Line for an event, or `None` when the event is silent.
    pub fn render(event: &BootstrapEvent) -> Option<String> {
        match event {
            BootstrapEvent::DependenciesSatisfied { present, total } => Some(format!(
                "ℹ️  Runtime dependencies found ({present}/{total})"
            )),
            BootstrapEvent::WrapperPresent { .. } => {
                Some("ℹ️  Wrapper already present, skipping download/build".to_string())
            }
            BootstrapEvent::DownloaderPresent { .. } => {
                Some("ℹ️  Apple Music Downloader already exists, skipping clone".to_string())
            }
            BootstrapEvent::CloneStarted { url, .. } => {
                Some(format!("⬇️  Cloning Apple Music Downloader from {url}..."))
            }
            BootstrapEvent::CloneCompleted { target } => Some(format!(
                "✅ Apple Music Downloader cloned into {}",
                target.display()
            )),
            BootstrapEvent::EnvironmentComposed { permissions, .. } => match permissions {
                PermissionChange::Applied { previous } => Some(format!(
                    "🔧 Wrapper made executable ({previous:o} -> 755)"
                )),
                PermissionChange::Unchanged | PermissionChange::BinaryAbsent => None,
            },
            BootstrapEvent::LaunchStarting { host, port, .. } => Some(format!(
                "🚀 Starting Apple Music Downloader Web UI on http://{host}:{port} ..."
            )),
        }
    }
}

impl BootstrapObserver for ConsoleObserver {
    fn on_event(&self, event: &BootstrapEvent) {
        if let Some(line) = Self::render(event) {
            println!("{line}");
        }
    }
}
