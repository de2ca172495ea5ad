//! Process exit statuses for each command.

use amdl_core::BootstrapError;
use amdl_core::ports::LaunchOutcome;

/// `check-deps` found a required dependency missing. Same as a failed
/// bootstrap dependency check (EX_UNAVAILABLE).
pub const MISSING_DEPENDENCIES: i32 = 69;

/// Any other ancillary command failure.
pub const GENERAL_FAILURE: i32 = 1;

/// Status for `start`: the server's own code once launched, otherwise the
/// bootstrap error's code.
pub const fn start_status(result: &Result<LaunchOutcome, BootstrapError>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => e.exit_code(),
    }
}

pub const fn check_deps_status(passed: bool) -> i32 {
    if passed { 0 } else { MISSING_DEPENDENCIES }
}

pub const fn paths_status(succeeded: bool) -> i32 {
    if succeeded { 0 } else { GENERAL_FAILURE }
}

/// Narrow a status to the byte a process can exit with.
///
/// Codes outside 0..=255 (signals, Windows NTSTATUS) collapse to 1.
pub fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
