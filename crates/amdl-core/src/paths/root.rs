//! Project root resolution.

use std::path::{Path, PathBuf};

use super::PathError;

/// Resolve the project root.
///
/// Priority:
/// 1. Explicit path (CLI flag or `AMDL_PROJECT_ROOT`, already merged by clap)
/// 2. Current working directory
///
/// The result is canonicalized so that every derived path is absolute.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    let candidate = match explicit {
        Some(path) if path.as_os_str().is_empty() => return Err(PathError::EmptyPath),
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?,
    };

    let root = candidate
        .canonicalize()
        .map_err(|e| PathError::Unresolvable {
            path: candidate.clone(),
            reason: e.to_string(),
        })?;

    if !root.is_dir() {
        return Err(PathError::NotADirectory(root));
    }

    Ok(root)
}
