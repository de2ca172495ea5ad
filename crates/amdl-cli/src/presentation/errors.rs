//! Fatal error reporting.

use amdl_core::BootstrapError;

use super::style::{BOLD, RED, RESET};

/// Print a bootstrap error and its remediation hints to stderr.
pub fn report_error(err: &BootstrapError) {
    eprintln!("{RED}❌ {err}{RESET}");

    let hints = err.hint();
    match err {
        BootstrapError::MissingDependencies { .. } if !hints.is_empty() => {
            eprintln!("{BOLD}Install them with:{RESET}");
            for hint in &hints {
                eprintln!("  {hint}");
            }
        }
        _ => {
            for hint in &hints {
                eprintln!("{hint}");
            }
        }
    }
}
