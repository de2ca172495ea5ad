//! Core domain for the amdl launcher.
//!
//! Holds the project layout, the dependency model, the port traits that
//! adapters implement, and the bootstrap sequence that drives them. Nothing in
//! this crate touches the terminal or spawns processes directly.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod environment;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

pub use domain::{Dependency, DependencyKind, DependencyStatus};
pub use environment::{LaunchEnvironment, PermissionChange, compose_search_path, ensure_executable};
pub use error::BootstrapError;
pub use paths::{PathError, ProjectLayout, resolve_project_root};
pub use ports::{
    BootstrapEvent, BootstrapObserver, DependencyProbe, FetchError, LaunchError, LaunchOutcome,
    LaunchSpec, NoopObserver, RepositoryFetcher, ServerLauncher,
};
pub use services::{Acquisition, BootstrapDeps, BootstrapSequence};
pub use settings::{
    DEFAULT_DOWNLOADER_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVER_ENTRY,
    DEFAULT_SERVER_PROGRAM, LauncherSettings,
};
