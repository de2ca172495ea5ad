//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the bootstrap sequence expects from
//! infrastructure. Implementations live in `amdl-runtime` (probing, cloning,
//! process launch) and `amdl-cli` (console output).
//!
//! # Design Rules
//!
//! - No process or terminal types in any signature
//! - Intent-based methods (fetch a repository, launch a server)

pub mod bootstrap_observer;
pub mod dependency_probe;
pub mod repository_fetcher;
pub mod server_launcher;

pub use bootstrap_observer::{BootstrapEvent, BootstrapObserver, NoopObserver};
pub use dependency_probe::DependencyProbe;
pub use repository_fetcher::{FetchError, RepositoryFetcher};
pub use server_launcher::{LaunchError, LaunchOutcome, LaunchSpec, ServerLauncher};
