//! Repository acquisition via `git clone`.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use amdl_core::ports::{FetchError, RepositoryFetcher};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::process::Command;
use tracing::{debug, warn};

/// Clones repositories with the `git` executable.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: String,
    show_progress: bool,
}

impl GitFetcher {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            show_progress: true,
        }
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Disable the terminal spinner (tests, non-interactive runs).
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        let template = "{spinner:.green} [{elapsed_precise}] {msg}";
        match ProgressStyle::default_spinner().template(template) {
            Ok(style) => pb.set_style(style),
            Err(e) => warn!("Invalid spinner template: {}", e),
        }
        pb.set_message("Cloning from remote...");
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryFetcher for GitFetcher {
    async fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError> {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        debug!("{} clone {} {}", self.program, url, target.display());

        let spinner = self.spinner();
        let status = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(target)
            // Fail instead of waiting on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .status()
            .await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let status = status.map_err(|e| FetchError::Spawn {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(FetchError::Exit {
                program: format!("{} clone", self.program),
                status: status.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
