//! Command handlers.

pub mod check_deps;
pub mod paths;
pub mod start;
