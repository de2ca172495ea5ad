//! CLI adapter for the amdl launcher.
//!
//! `main.rs` parses arguments, composes a [`CliContext`] and dispatches to a
//! handler. Handlers own all terminal output.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod exit;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, compose};
pub use commands::Commands;
pub use parser::{Cli, LaunchArgs};
