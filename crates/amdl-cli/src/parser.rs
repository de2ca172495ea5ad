//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use amdl_core::{
    DEFAULT_DOWNLOADER_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVER_ENTRY,
    DEFAULT_SERVER_PROGRAM, LauncherSettings,
};
use clap::{Args, Parser};

use crate::commands::Commands;

/// Prepare and launch the Apple Music Downloader web UI.
///
/// With no subcommand, runs the full bootstrap and starts the server.
#[derive(Parser)]
#[command(name = "amdl")]
#[command(about = "Prepare and launch the Apple Music Downloader web UI")]
#[command(version)]
pub struct Cli {
    /// Project checkout containing apps/ (defaults to the current directory)
    #[arg(long = "project-root", env = "AMDL_PROJECT_ROOT", global = true)]
    pub project_root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub launch: LaunchArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for the delegated web server and the downloader clone.
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Address the web server binds to
    #[arg(long, env = "AMDL_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port the web server listens on
    #[arg(long, env = "AMDL_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Do not restart the server when its sources change
    #[arg(long, global = true)]
    pub no_reload: bool,

    /// Repository cloned when the downloader directory is absent
    #[arg(long, env = "AMDL_DOWNLOADER_URL", default_value = DEFAULT_DOWNLOADER_URL, global = true)]
    pub downloader_url: String,

    /// Runtime used to run the web server
    #[arg(long, default_value = DEFAULT_SERVER_PROGRAM, global = true)]
    pub server_program: String,

    /// Server entry point, relative to apps/web
    #[arg(long, default_value = DEFAULT_SERVER_ENTRY, global = true)]
    pub server_entry: String,
}

impl LaunchArgs {
    pub fn to_settings(&self) -> LauncherSettings {
        LauncherSettings {
            host: self.host.clone(),
            port: self.port,
            reload: !self.no_reload,
            downloader_url: self.downloader_url.clone(),
            server_program: self.server_program.clone(),
            server_entry: self.server_entry.clone(),
        }
    }
}
