//! The bootstrap sequence.
//!
//! Runs dependency check → wrapper verification → downloader acquisition →
//! environment composition → launch, strictly in that order. The first error
//! stops the sequence; nothing already done is rolled back.

use std::ffi::OsString;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::Dependency;
use crate::environment::{LaunchEnvironment, compose_search_path, ensure_executable};
use crate::error::BootstrapError;
use crate::paths::ProjectLayout;
use crate::ports::{
    BootstrapEvent, BootstrapObserver, DependencyProbe, LaunchOutcome, LaunchSpec,
    RepositoryFetcher, ServerLauncher,
};
use crate::settings::LauncherSettings;

/// Whether the downloader had to be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    AlreadyPresent,
    Cloned,
}

/// Injected collaborators for [`BootstrapSequence`].
pub struct BootstrapDeps {
    pub layout: ProjectLayout,
    pub settings: LauncherSettings,
    /// `PATH` as inherited by this process; `None` if unset.
    pub inherited_search_path: Option<OsString>,
    pub probe: Arc<dyn DependencyProbe>,
    pub fetcher: Arc<dyn RepositoryFetcher>,
    pub launcher: Arc<dyn ServerLauncher>,
    pub observer: Arc<dyn BootstrapObserver>,
}

/// One-shot, forward-only bootstrap.
pub struct BootstrapSequence {
    layout: ProjectLayout,
    settings: LauncherSettings,
    inherited_search_path: Option<OsString>,
    probe: Arc<dyn DependencyProbe>,
    fetcher: Arc<dyn RepositoryFetcher>,
    launcher: Arc<dyn ServerLauncher>,
    observer: Arc<dyn BootstrapObserver>,
}

impl BootstrapSequence {
    pub fn new(deps: BootstrapDeps) -> Self {
        Self {
            layout: deps.layout,
            settings: deps.settings,
            inherited_search_path: deps.inherited_search_path,
            probe: deps.probe,
            fetcher: deps.fetcher,
            launcher: deps.launcher,
            observer: deps.observer,
        }
    }

    pub const fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run every step and hand off to the server.
    pub async fn run(&self) -> Result<LaunchOutcome, BootstrapError> {
        self.check_dependencies()?;
        self.verify_wrapper()?;
        self.ensure_downloader().await?;
        let env = self.compose_environment()?;
        self.launch(&env).await
    }

    /// Fail if any required dependency is missing.
    pub fn check_dependencies(&self) -> Result<Vec<Dependency>, BootstrapError> {
        let deps = self.probe.check_all_dependencies();
        let missing: Vec<&Dependency> = deps.iter().filter(|d| d.blocks_bootstrap()).collect();

        if !missing.is_empty() {
            let mut hints: Vec<String> = Vec::new();
            for hint in missing.iter().filter_map(|d| d.install_hint.clone()) {
                if !hints.contains(&hint) {
                    hints.push(hint);
                }
            }
            return Err(BootstrapError::MissingDependencies {
                missing: missing.iter().map(|d| d.name.clone()).collect(),
                hints,
            });
        }

        let present = deps.iter().filter(|d| !d.is_missing()).count();
        debug!("Dependencies checked: {}/{} present", present, deps.len());
        self.observer.on_event(&BootstrapEvent::DependenciesSatisfied {
            present,
            total: deps.len(),
        });
        Ok(deps)
    }

    /// Require the wrapper binary and rootfs. Never builds or downloads them.
    pub fn verify_wrapper(&self) -> Result<(), BootstrapError> {
        let missing = self.layout.missing_wrapper_paths();
        if !missing.is_empty() {
            return Err(BootstrapError::WrapperMissing {
                wrapper_dir: self.layout.wrapper_dir.clone(),
                missing,
            });
        }

        self.observer.on_event(&BootstrapEvent::WrapperPresent {
            binary: self.layout.wrapper_binary.clone(),
        });
        Ok(())
    }

    /// Clone the downloader repository unless its directory already exists.
    pub async fn ensure_downloader(&self) -> Result<Acquisition, BootstrapError> {
        let target = &self.layout.downloader_dir;
        if target.exists() {
            self.observer.on_event(&BootstrapEvent::DownloaderPresent {
                path: target.clone(),
            });
            return Ok(Acquisition::AlreadyPresent);
        }

        let url = &self.settings.downloader_url;
        info!("Cloning {} into {}", url, target.display());
        self.observer.on_event(&BootstrapEvent::CloneStarted {
            url: url.clone(),
            target: target.clone(),
        });

        self.fetcher
            .fetch(url, target)
            .await
            .map_err(|source| BootstrapError::CloneFailed {
                url: url.clone(),
                target: target.clone(),
                source,
            })?;

        self.observer.on_event(&BootstrapEvent::CloneCompleted {
            target: target.clone(),
        });
        Ok(Acquisition::Cloned)
    }

    /// Compose the search path and make the wrapper executable.
    pub fn compose_environment(&self) -> Result<LaunchEnvironment, BootstrapError> {
        let search_path = compose_search_path(
            &self.layout.wrapper_dir,
            self.inherited_search_path.as_deref(),
        )
        .map_err(|e| BootstrapError::Environment(e.to_string()))?;

        let permissions = ensure_executable(&self.layout.wrapper_binary).map_err(|e| {
            BootstrapError::Environment(format!(
                "cannot set permissions on {}: {}",
                self.layout.wrapper_binary.display(),
                e
            ))
        })?;

        self.observer.on_event(&BootstrapEvent::EnvironmentComposed {
            wrapper_dir: self.layout.wrapper_dir.clone(),
            permissions,
        });

        Ok(LaunchEnvironment {
            search_path,
            permissions,
        })
    }

    /// Build the launch spec for the delegated server.
    pub fn launch_spec(&self, env: &LaunchEnvironment) -> LaunchSpec {
        LaunchSpec {
            program: self.settings.server_program.clone(),
            args: self.settings.server_args(),
            working_dir: self.layout.web_dir.clone(),
            env: vec![
                ("PATH".to_string(), env.search_path.clone()),
                ("HOST".to_string(), OsString::from(&self.settings.host)),
                ("PORT".to_string(), OsString::from(self.settings.port.to_string())),
            ],
        }
    }

    /// Terminal step: start the server and wait for it.
    pub async fn launch(&self, env: &LaunchEnvironment) -> Result<LaunchOutcome, BootstrapError> {
        let spec = self.launch_spec(env);
        self.observer.on_event(&BootstrapEvent::LaunchStarting {
            program: spec.program.clone(),
            host: self.settings.host.clone(),
            port: self.settings.port,
        });
        Ok(self.launcher.launch(spec).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyKind, DependencyStatus};
    use crate::environment::PermissionChange;
    use crate::ports::{FetchError, LaunchError, NoopObserver};
    use async_trait::async_trait;
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::{TempDir, tempdir};

    struct MockProbe {
        deps: Vec<Dependency>,
    }

    impl DependencyProbe for MockProbe {
        fn check_all_dependencies(&self) -> Vec<Dependency> {
            self.deps.clone()
        }
    }

    /// Records calls; optionally creates the target and/or fails.
    struct MockFetcher {
        calls: Mutex<Vec<(String, PathBuf)>>,
        create_target: bool,
        fail_with_code: Option<i32>,
    }

    impl MockFetcher {
        fn succeeding() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                create_target: true,
                fail_with_code: None,
            }
        }

        fn failing(code: i32) -> Self {
            Self {
                calls: Mutex::new(vec![]),
                create_target: true,
                fail_with_code: Some(code),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RepositoryFetcher for MockFetcher {
        async fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), target.to_path_buf()));
            if self.create_target {
                std::fs::create_dir_all(target)?;
            }
            match self.fail_with_code {
                Some(code) => Err(FetchError::Exit {
                    program: "git".to_string(),
                    status: format!("exit status: {code}"),
                    code: Some(code),
                }),
                None => Ok(()),
            }
        }
    }

    struct MockLauncher {
        specs: Mutex<Vec<LaunchSpec>>,
        spawn_fails: bool,
        exit_code: i32,
    }

    impl MockLauncher {
        fn exiting_with(exit_code: i32) -> Self {
            Self {
                specs: Mutex::new(vec![]),
                spawn_fails: false,
                exit_code,
            }
        }

        fn failing_to_spawn() -> Self {
            Self {
                spawn_fails: true,
                ..Self::exiting_with(0)
            }
        }

        fn launched(&self) -> Vec<LaunchSpec> {
            self.specs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ServerLauncher for MockLauncher {
        async fn launch(&self, spec: LaunchSpec) -> Result<LaunchOutcome, LaunchError> {
            self.specs.lock().unwrap().push(spec);
            if self.spawn_fails {
                return Err(LaunchError::Spawn {
                    program: "bun".to_string(),
                    reason: "No such file or directory".to_string(),
                });
            }
            Ok(LaunchOutcome::Exited {
                code: Some(self.exit_code),
            })
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<BootstrapEvent>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<BootstrapEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl BootstrapObserver for RecordingObserver {
        fn on_event(&self, event: &BootstrapEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    struct Harness {
        _temp: TempDir,
        layout: ProjectLayout,
        fetcher: Arc<MockFetcher>,
        launcher: Arc<MockLauncher>,
        observer: Arc<RecordingObserver>,
        sequence: BootstrapSequence,
    }

    fn present_deps() -> Vec<Dependency> {
        vec![
            Dependency::required("bun", DependencyKind::Executable, "JS runtime").with_status(
                DependencyStatus::Present {
                    version: "1.1.30".to_string(),
                },
            ),
            Dependency::optional("git", DependencyKind::Executable, "VCS"),
        ]
    }

    fn write_wrapper(layout: &ProjectLayout) {
        std::fs::create_dir_all(&layout.wrapper_rootfs).unwrap();
        std::fs::write(&layout.wrapper_binary, b"#!/bin/sh\n").unwrap();
    }

    fn harness(
        deps: Vec<Dependency>,
        fetcher: MockFetcher,
        launcher: MockLauncher,
        setup: impl FnOnce(&ProjectLayout),
    ) -> Harness {
        let temp = tempdir().unwrap();
        let layout = ProjectLayout::new(temp.path());
        setup(&layout);

        let fetcher = Arc::new(fetcher);
        let launcher = Arc::new(launcher);
        let observer = Arc::new(RecordingObserver::default());
        let sequence = BootstrapSequence::new(BootstrapDeps {
            layout: layout.clone(),
            settings: LauncherSettings::default(),
            inherited_search_path: Some(OsString::from("/usr/bin")),
            probe: Arc::new(MockProbe { deps }),
            fetcher: fetcher.clone(),
            launcher: launcher.clone(),
            observer: observer.clone(),
        });

        Harness {
            _temp: temp,
            layout,
            fetcher,
            launcher,
            observer,
            sequence,
        }
    }

    #[tokio::test]
    async fn test_missing_required_dependency_stops_everything() {
        let deps = vec![
            Dependency::required("bun", DependencyKind::Executable, "JS runtime")
                .with_hint("curl -fsSL https://bun.sh/install | bash"),
            Dependency::required("elysia", DependencyKind::Package, "HTTP framework")
                .with_hint("cd apps/web && bun install"),
            Dependency::required("js-yaml", DependencyKind::Package, "YAML parser")
                .with_hint("cd apps/web && bun install"),
        ];
        let h = harness(
            deps,
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            write_wrapper,
        );

        let err = h.sequence.run().await.unwrap_err();
        match &err {
            BootstrapError::MissingDependencies { missing, hints } => {
                assert_eq!(missing, &["bun", "elysia", "js-yaml"]);
                // Duplicate hints collapse
                assert_eq!(hints.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_ne!(err.exit_code(), 0);
        assert_eq!(h.fetcher.call_count(), 0);
        assert!(h.launcher.launched().is_empty());
        assert!(h.observer.events().is_empty());
    }

    #[tokio::test]
    async fn test_wrapper_absent_fails_before_clone_or_environment() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            |_| {},
        );

        let err = h.sequence.run().await.unwrap_err();
        assert!(matches!(err, BootstrapError::WrapperMissing { .. }));
        assert_ne!(err.exit_code(), 0);
        assert_eq!(h.fetcher.call_count(), 0);
        assert!(h.launcher.launched().is_empty());
        assert!(!h.layout.downloader_dir.exists());
        assert!(
            !h.observer
                .events()
                .iter()
                .any(|e| matches!(e, BootstrapEvent::EnvironmentComposed { .. }))
        );
    }

    #[test]
    fn test_rootfs_alone_missing_is_fatal() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            |layout| {
                std::fs::create_dir_all(&layout.wrapper_dir).unwrap();
                std::fs::write(&layout.wrapper_binary, b"bin").unwrap();
            },
        );

        match h.sequence.verify_wrapper() {
            Err(BootstrapError::WrapperMissing { missing, .. }) => {
                assert_eq!(missing, vec![h.layout.wrapper_rootfs.clone()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_existing_downloader_skips_clone() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            |layout| {
                write_wrapper(layout);
                std::fs::create_dir_all(&layout.downloader_dir).unwrap();
            },
        );

        assert_eq!(
            h.sequence.ensure_downloader().await.unwrap(),
            Acquisition::AlreadyPresent
        );
        // Second run is also a no-op
        assert_eq!(
            h.sequence.ensure_downloader().await.unwrap(),
            Acquisition::AlreadyPresent
        );
        assert_eq!(h.fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clone_then_idempotent() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            write_wrapper,
        );

        assert_eq!(h.sequence.ensure_downloader().await.unwrap(), Acquisition::Cloned);
        assert_eq!(
            h.sequence.ensure_downloader().await.unwrap(),
            Acquisition::AlreadyPresent
        );

        let calls = h.fetcher.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![(
                crate::settings::DEFAULT_DOWNLOADER_URL.to_string(),
                h.layout.downloader_dir.clone()
            )]
        );
    }

    #[tokio::test]
    async fn test_clone_failure_stops_before_environment_and_launch() {
        let h = harness(
            present_deps(),
            MockFetcher::failing(128),
            MockLauncher::exiting_with(0),
            write_wrapper,
        );

        let err = h.sequence.run().await.unwrap_err();
        match &err {
            BootstrapError::CloneFailed { source, .. } => {
                assert!(matches!(source, FetchError::Exit { code: Some(128), .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_ne!(err.exit_code(), 0);
        assert!(h.launcher.launched().is_empty());
        // Partial clone is left for inspection
        assert!(h.layout.downloader_dir.exists());

        let events = h.observer.events();
        assert!(matches!(events.last(), Some(BootstrapEvent::CloneStarted { .. })));
    }

    #[tokio::test]
    async fn test_clone_success_then_launch() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            write_wrapper,
        );

        let outcome = h.sequence.run().await.unwrap();
        assert_eq!(outcome, LaunchOutcome::Exited { code: Some(0) });
        assert_eq!(h.fetcher.call_count(), 1);

        let launched = h.launcher.launched();
        assert_eq!(launched.len(), 1);
        let spec = &launched[0];
        assert_eq!(spec.program, "bun");
        assert_eq!(spec.args, vec!["--watch", "server/index.ts"]);
        assert_eq!(spec.working_dir, h.layout.web_dir);
        assert_eq!(spec.env_var("HOST"), Some(OsStr::new("0.0.0.0")));
        assert_eq!(spec.env_var("PORT"), Some(OsStr::new("5000")));

        let path = spec.env_var("PATH").unwrap();
        let first = std::env::split_paths(path).next().unwrap();
        assert_eq!(first, h.layout.wrapper_dir);
    }

    #[tokio::test]
    async fn test_outcome_reflects_only_launch() {
        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(2),
            write_wrapper,
        );
        let outcome = h.sequence.run().await.unwrap();
        assert_eq!(outcome.exit_code(), 2);

        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::failing_to_spawn(),
            write_wrapper,
        );
        let err = h.sequence.run().await.unwrap_err();
        assert!(matches!(err, BootstrapError::LaunchFailed(LaunchError::Spawn { .. })));
        assert_ne!(err.exit_code(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_all_present_goes_straight_to_launch() {
        use std::os::unix::fs::PermissionsExt;

        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            |layout| {
                write_wrapper(layout);
                std::fs::set_permissions(
                    &layout.wrapper_binary,
                    std::fs::Permissions::from_mode(0o755),
                )
                .unwrap();
                std::fs::create_dir_all(&layout.downloader_dir).unwrap();
            },
        );

        h.sequence.run().await.unwrap();
        assert_eq!(h.fetcher.call_count(), 0);
        assert_eq!(h.launcher.launched().len(), 1);

        let events = h.observer.events();
        assert_eq!(
            events,
            vec![
                BootstrapEvent::DependenciesSatisfied {
                    present: 1,
                    total: 2
                },
                BootstrapEvent::WrapperPresent {
                    binary: h.layout.wrapper_binary.clone()
                },
                BootstrapEvent::DownloaderPresent {
                    path: h.layout.downloader_dir.clone()
                },
                BootstrapEvent::EnvironmentComposed {
                    wrapper_dir: h.layout.wrapper_dir.clone(),
                    permissions: PermissionChange::Unchanged,
                },
                BootstrapEvent::LaunchStarting {
                    program: "bun".to_string(),
                    host: "0.0.0.0".to_string(),
                    port: 5000,
                },
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_compose_environment_makes_wrapper_executable() {
        use std::os::unix::fs::PermissionsExt;

        let h = harness(
            present_deps(),
            MockFetcher::succeeding(),
            MockLauncher::exiting_with(0),
            |layout| {
                write_wrapper(layout);
                std::fs::set_permissions(
                    &layout.wrapper_binary,
                    std::fs::Permissions::from_mode(0o644),
                )
                .unwrap();
            },
        );

        let env = h.sequence.compose_environment().unwrap();
        assert_eq!(env.first_search_entry(), Some(h.layout.wrapper_dir.clone()));
        assert_eq!(env.permissions, PermissionChange::Applied { previous: 0o644 });

        let mode = std::fs::metadata(&h.layout.wrapper_binary)
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[tokio::test]
    async fn test_runs_with_silent_observer() {
        let temp = tempdir().unwrap();
        let layout = ProjectLayout::new(temp.path());
        write_wrapper(&layout);
        std::fs::create_dir_all(&layout.downloader_dir).unwrap();

        let launcher = Arc::new(MockLauncher::exiting_with(0));
        let sequence = BootstrapSequence::new(BootstrapDeps {
            layout: layout.clone(),
            settings: LauncherSettings::default(),
            inherited_search_path: None,
            probe: Arc::new(MockProbe { deps: present_deps() }),
            fetcher: Arc::new(MockFetcher::succeeding()),
            launcher: launcher.clone(),
            observer: Arc::new(NoopObserver),
        });

        assert_eq!(sequence.layout(), &layout);
        let outcome = sequence.run().await.unwrap();
        assert!(outcome.is_success());

        let specs = launcher.launched();
        assert_eq!(specs.len(), 1);
        // No inherited PATH: the wrapper dir is the whole search path
        assert_eq!(specs[0].env_var("PATH"), Some(layout.wrapper_dir.as_os_str()));
    }
}
