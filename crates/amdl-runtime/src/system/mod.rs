//! Dependency probe implementation.
//!
//! `DefaultDependencyProbe` implements `DependencyProbe` from amdl-core by
//! looking up executables on `PATH` and package manifests under the web
//! application's `node_modules`.

mod commands;
mod packages;

use std::path::PathBuf;

use amdl_core::ports::DependencyProbe;
use amdl_core::{Dependency, DependencyKind};

pub use commands::{find_executable, get_command_version};
pub use packages::{package_manifest_path, package_version};

/// HTTP-serving framework the web server is built on.
pub const HTTP_FRAMEWORK_PACKAGE: &str = "elysia";
/// YAML parser the web server uses for the downloader's `config.yaml`.
pub const CONFIG_PACKAGE: &str = "js-yaml";

/// Default implementation of `DependencyProbe`.
///
/// Constructed in the CLI composition root with the resolved web directory
/// and the configured server program.
pub struct DefaultDependencyProbe {
    web_dir: PathBuf,
    server_program: String,
}

impl DefaultDependencyProbe {
    pub fn new(web_dir: impl Into<PathBuf>, server_program: impl Into<String>) -> Self {
        Self {
            web_dir: web_dir.into(),
            server_program: server_program.into(),
        }
    }

    fn runtime_hint(&self) -> String {
        if self.server_program == "bun" {
            "curl -fsSL https://bun.sh/install | bash".to_string()
        } else {
            format!("Install {} and make sure it is on PATH", self.server_program)
        }
    }

    fn package_hint(&self) -> String {
        format!(
            "cd {} && {} install",
            self.web_dir.display(),
            self.server_program
        )
    }

    fn executable(dep: Dependency) -> Dependency {
        let version = find_executable(&dep.name).map(|path| {
            get_command_version(&path, "--version").unwrap_or_default()
        });
        dep.with_version(version)
    }

    fn package(&self, dep: Dependency) -> Dependency {
        let version = package_version(&self.web_dir, &dep.name);
        dep.with_version(version)
    }
}

impl DependencyProbe for DefaultDependencyProbe {
    fn check_all_dependencies(&self) -> Vec<Dependency> {
        vec![
            Self::executable(
                Dependency::required(
                    self.server_program.as_str(),
                    DependencyKind::Executable,
                    "Runtime that serves the web UI",
                )
                .with_hint(self.runtime_hint()),
            ),
            self.package(
                Dependency::required(
                    HTTP_FRAMEWORK_PACKAGE,
                    DependencyKind::Package,
                    "HTTP framework for the web server",
                )
                .with_hint(self.package_hint()),
            ),
            self.package(
                Dependency::required(
                    CONFIG_PACKAGE,
                    DependencyKind::Package,
                    "Reads the downloader's config.yaml",
                )
                .with_hint(self.package_hint()),
            ),
            Self::executable(
                Dependency::optional(
                    "git",
                    DependencyKind::Executable,
                    "Clones the downloader when it is absent",
                )
                .with_hint("apt install git"),
            ),
        ]
    }
}
