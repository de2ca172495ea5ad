//! JavaScript package resolution under the web app's `node_modules`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Path to `node_modules/<name>/package.json` under `web_dir`.
///
/// Scoped names (`@scope/pkg`) map onto nested directories.
pub fn package_manifest_path(web_dir: &Path, name: &str) -> PathBuf {
    web_dir.join("node_modules").join(name).join("package.json")
}

/// Installed version of a package, if it resolves.
///
/// A manifest without a `version` field still counts as present and
/// reports an empty version. An unreadable manifest counts as missing.
pub fn package_version(web_dir: &Path, name: &str) -> Option<String> {
    let manifest_path = package_manifest_path(web_dir, name);
    let raw = std::fs::read_to_string(&manifest_path).ok()?;

    match serde_json::from_str::<PackageManifest>(&raw) {
        Ok(manifest) => Some(manifest.version.unwrap_or_default()),
        Err(e) => {
            debug!("Unparseable manifest {}: {}", manifest_path.display(), e);
            None
        }
    }
}
