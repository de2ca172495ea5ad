//! Default command: run the bootstrap sequence and hand off to the server.

use std::sync::Arc;

use amdl_core::BootstrapError;
use amdl_core::ports::LaunchOutcome;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::ConsoleObserver;

/// Execute the start command.
///
/// Returns the server's outcome once it stops. Every precondition failure is
/// returned as a `BootstrapError` before the server is started.
pub async fn execute(ctx: &CliContext) -> Result<LaunchOutcome, BootstrapError> {
    let sequence = ctx.sequence(Arc::new(ConsoleObserver));
    debug!("Bootstrapping {}", sequence.layout().root().display());
    sequence.run().await
}
