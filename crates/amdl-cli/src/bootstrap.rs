//! CLI composition root.
//!
//! This is the only place where runtime adapters are instantiated and wired
//! into the core bootstrap sequence.

use std::path::PathBuf;
use std::sync::Arc;

use amdl_core::ports::{BootstrapObserver, DependencyProbe, RepositoryFetcher, ServerLauncher};
use amdl_core::{
    BootstrapDeps, BootstrapError, BootstrapSequence, LauncherSettings, ProjectLayout,
    resolve_project_root,
};
use amdl_runtime::{DefaultDependencyProbe, GitFetcher, ProcessServerLauncher};
use tracing::debug;

use crate::parser::Cli;

/// Inputs for composing a [`CliContext`].
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub project_root: Option<PathBuf>,
    pub settings: LauncherSettings,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            project_root: cli.project_root.clone(),
            settings: cli.launch.to_settings(),
        }
    }
}

/// Resolved layout, settings and the dependency probe for one invocation.
pub struct CliContext {
    pub layout: ProjectLayout,
    pub settings: LauncherSettings,
    pub probe: Arc<dyn DependencyProbe>,
}

/// Resolve the project root and build the context.
pub fn compose(config: CliConfig) -> Result<CliContext, BootstrapError> {
    let root = resolve_project_root(config.project_root.as_deref())?;
    debug!("Project root: {}", root.display());

    let layout = ProjectLayout::new(root);
    let probe: Arc<dyn DependencyProbe> = Arc::new(DefaultDependencyProbe::new(
        layout.web_dir.clone(),
        config.settings.server_program.clone(),
    ));

    Ok(CliContext {
        layout,
        settings: config.settings,
        probe,
    })
}

impl CliContext {
    /// Bootstrap sequence backed by git and a child-process launcher.
    pub fn sequence(&self, observer: Arc<dyn BootstrapObserver>) -> BootstrapSequence {
        self.sequence_with(
            Arc::new(GitFetcher::new()),
            Arc::new(ProcessServerLauncher::new()),
            observer,
        )
    }

    /// Bootstrap sequence with caller-supplied adapters.
    pub fn sequence_with(
        &self,
        fetcher: Arc<dyn RepositoryFetcher>,
        launcher: Arc<dyn ServerLauncher>,
        observer: Arc<dyn BootstrapObserver>,
    ) -> BootstrapSequence {
        BootstrapSequence::new(BootstrapDeps {
            layout: self.layout.clone(),
            settings: self.settings.clone(),
            inherited_search_path: std::env::var_os("PATH"),
            probe: self.probe.clone(),
            fetcher,
            launcher,
            observer,
        })
    }
}
