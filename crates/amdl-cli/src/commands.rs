//! Subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Verify prerequisites, clone the downloader if needed, and start the web UI (default)
    Start,

    /// Check runtime dependencies of the web server
    CheckDeps,

    /// Show resolved project paths and whether they exist
    Paths {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
