//! Executable lookup and version extraction.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Locate an executable on the inherited search path.
pub fn find_executable(cmd: &str) -> Option<PathBuf> {
    which::which(cmd).ok()
}

/// Get the version of a command by running it with the given flag.
///
/// Returns the first non-empty output line, preferring stdout.
pub fn get_command_version(cmd: &Path, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Some tools print their version on stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    Some(extract_version(line).to_string())
}

/// Pull a version token out of a `--version` line.
///
/// "git version 2.43.0" -> "2.43.0", "1.1.30" -> "1.1.30", "v20.10.0" -> "20.10.0"
fn extract_version(line: &str) -> &str {
    line.split_whitespace()
        .map(|word| word.trim_start_matches('v'))
        .find(|word| word.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_executable_nonexistent() {
        assert!(find_executable("nonexistent-command-12345").is_none());
    }

    #[test]
    fn test_extract_version() {
        assert_eq!(extract_version("git version 2.43.0"), "2.43.0");
        assert_eq!(extract_version("1.1.30"), "1.1.30");
        assert_eq!(extract_version("v20.10.0"), "20.10.0");
        assert_eq!(extract_version("unknown"), "unknown");
    }
}
