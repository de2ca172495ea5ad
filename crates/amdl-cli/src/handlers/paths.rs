//! Show resolved project paths.

use std::io::{self, Write};
use std::path::Path;

use amdl_core::ProjectLayout;
use anyhow::Result;
use serde::Serialize;

use crate::presentation::{BOLD, GREEN, RESET, YELLOW};

#[derive(Debug, Serialize)]
struct PathEntry<'a> {
    name: &'static str,
    path: &'a Path,
    exists: bool,
}

fn entries(layout: &ProjectLayout) -> Vec<PathEntry<'_>> {
    layout
        .entries()
        .into_iter()
        .map(|(name, path)| PathEntry {
            name,
            path,
            exists: path.exists(),
        })
        .collect()
}

/// Render the layout as pretty JSON.
pub fn render_json(layout: &ProjectLayout) -> Result<String> {
    Ok(serde_json::to_string_pretty(&entries(layout))?)
}

/// Execute the paths command.
pub fn execute(layout: &ProjectLayout, json: bool) -> Result<()> {
    write_paths(&mut io::stdout().lock(), layout, json)
}

/// Write the layout as text or JSON to `out`.
pub fn write_paths(out: &mut impl Write, layout: &ProjectLayout, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", render_json(layout)?)?;
        return Ok(());
    }

    writeln!(out, "{BOLD}Project paths{RESET}")?;
    for entry in entries(layout) {
        let marker = if entry.exists {
            format!("{GREEN}✓{RESET}")
        } else {
            format!("{YELLOW}✗{RESET}")
        };
        writeln!(out, "  {marker} {:<16} {}", entry.name, entry.path.display())?;
    }
    Ok(())
}
