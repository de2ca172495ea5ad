//! Check runtime dependencies handler.

use amdl_core::ports::DependencyProbe;
use amdl_core::{Dependency, DependencyKind, DependencyStatus};
use anyhow::Result;

use crate::presentation::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};

/// Execute the check-deps command.
///
/// Prints every dependency and fails if a required one is missing.
pub fn execute(probe: &dyn DependencyProbe) -> Result<()> {
    println!("{BOLD}{BLUE}Checking runtime dependencies...{RESET}\n");

    let dependencies = probe.check_all_dependencies();

    println!(
        "{}{:<20} {:<12} {:<15} {:<40}{}",
        BOLD, "DEPENDENCY", "KIND", "STATUS", "NOTES", RESET
    );
    println!("{}", "=".repeat(90));
    for dep in &dependencies {
        println!("{}", dependency_row(dep));
    }
    println!("{}", "=".repeat(90));

    let missing: Vec<&Dependency> = dependencies.iter().filter(|d| d.blocks_bootstrap()).collect();
    let total_required = dependencies.iter().filter(|d| d.required).count();
    let present_required = total_required - missing.len();

    if missing.is_empty() {
        println!(
            "{GREEN}✓ All required dependencies are installed!{RESET} ({present_required}/{total_required})"
        );
        return Ok(());
    }

    println!(
        "{RED}✗ {} required dependencies are missing.{RESET} ({present_required}/{total_required})",
        missing.len()
    );
    println!();
    for dep in &missing {
        if let Some(hint) = &dep.install_hint {
            println!("  {BOLD}{}{RESET}: {hint}", dep.name);
        }
    }
    anyhow::bail!(
        "Missing required dependencies: {}",
        missing
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// One table row: required marker, name, kind, status, description.
pub fn dependency_row(dep: &Dependency) -> String {
    let status = match &dep.status {
        DependencyStatus::Present { version } if version.is_empty() => {
            format!("{GREEN}✓ installed{RESET}")
        }
        DependencyStatus::Present { version } => format!("{GREEN}✓ v{version}{RESET}"),
        DependencyStatus::Missing if dep.required => format!("{RED}✗ missing{RESET}"),
        DependencyStatus::Missing => format!("{YELLOW}○ missing{RESET}"),
    };
    let kind = match dep.kind {
        DependencyKind::Executable => "executable",
        DependencyKind::Package => "package",
    };
    let marker = if dep.required {
        format!("{RED}*{RESET}")
    } else {
        " ".to_string()
    };

    format!(
        "{}{:<19} {:<12} {:<25} {}",
        marker, dep.name, kind, status, dep.description
    )
}
