//! Services that orchestrate ports.

mod bootstrap;

pub use bootstrap::{Acquisition, BootstrapDeps, BootstrapSequence};
