//! Launch environment composition.
//!
//! The composed search path is carried as a value and handed to the launcher;
//! the launcher process's own environment is never modified.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use tracing::debug;

/// Mode applied to the wrapper binary: rwx for owner, r-x for group/other.
pub const WRAPPER_MODE: u32 = 0o755;

/// What [`ensure_executable`] did to the wrapper binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionChange {
    /// Mode bits were rewritten; holds the previous permission bits.
    Applied { previous: u32 },
    /// Mode bits already matched.
    Unchanged,
    /// The binary does not exist, so nothing was done.
    BinaryAbsent,
}

/// Environment handed to the delegated server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEnvironment {
    /// Composed `PATH` value, wrapper directory first.
    pub search_path: OsString,
    pub permissions: PermissionChange,
}

impl LaunchEnvironment {
    /// First entry of the composed search path.
    pub fn first_search_entry(&self) -> Option<PathBuf> {
        std::env::split_paths(&self.search_path).next()
    }
}

/// Build `wrapper_dir` + separator + inherited value.
///
/// An absent or empty inherited value yields just the wrapper directory.
/// Fails when `wrapper_dir` contains the platform path separator.
pub fn compose_search_path(
    wrapper_dir: &Path,
    inherited: Option<&OsStr>,
) -> Result<OsString, std::env::JoinPathsError> {
    let mut entries = vec![wrapper_dir.to_path_buf()];
    if let Some(old) = inherited.filter(|old| !old.is_empty()) {
        entries.extend(std::env::split_paths(old));
    }
    std::env::join_paths(entries)
}

/// Make the wrapper binary executable if it exists.
#[cfg(unix)]
pub fn ensure_executable(binary: &Path) -> io::Result<PermissionChange> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = match std::fs::metadata(binary) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Wrapper binary absent, skipping chmod: {}", binary.display());
            return Ok(PermissionChange::BinaryAbsent);
        }
        Err(e) => return Err(e),
    };

    let mut perms = metadata.permissions();
    let previous = perms.mode() & 0o777;
    if previous == WRAPPER_MODE {
        return Ok(PermissionChange::Unchanged);
    }

    perms.set_mode(WRAPPER_MODE);
    std::fs::set_permissions(binary, perms)?;
    debug!(
        "Set wrapper mode {:o} -> {:o}: {}",
        previous,
        WRAPPER_MODE,
        binary.display()
    );
    Ok(PermissionChange::Applied { previous })
}

/// Make the wrapper binary executable if it exists.
///
/// Non-Unix platforms have no mode bits to set.
#[cfg(not(unix))]
pub fn ensure_executable(binary: &Path) -> io::Result<PermissionChange> {
    if binary.exists() {
        Ok(PermissionChange::Unchanged)
    } else {
        Ok(PermissionChange::BinaryAbsent)
    }
}
