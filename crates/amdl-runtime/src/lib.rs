//! OS adapters for the amdl launcher.
//!
//! Implements the ports defined in `amdl-core`:
//! - [`DefaultDependencyProbe`] searches `PATH` and the web app's `node_modules`
//! - [`GitFetcher`] clones the downloader repository with `git`
//! - [`ProcessServerLauncher`] runs the web server as a child process

#![deny(unused_crate_dependencies)]

pub mod git;
pub mod launcher;
pub mod system;

pub use git::GitFetcher;
pub use launcher::ProcessServerLauncher;
pub use system::DefaultDependencyProbe;
