//! Dependency probe port.
//!
//! Core owns the trait and the `Dependency` type; runtime owns the
//! implementation that actually searches `PATH` and `node_modules`.

use crate::domain::Dependency;

/// Port for probing the runtime dependencies of the delegated server.
pub trait DependencyProbe: Send + Sync {
    /// Check every known dependency and return its status.
    ///
    /// The list order is the display order.
    fn check_all_dependencies(&self) -> Vec<Dependency>;
}
