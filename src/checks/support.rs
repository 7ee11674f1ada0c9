//! Helpers shared by the worktree checks
//!
//! File access here converts I/O and parse errors straight into
//! [`CheckError`]s, so a missing or malformed file shows up as a failure of
//! the check that needed it.

use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption};
use log::debug;
use similar::{ChangeTag, TextDiff};

use crate::core::models::{CheckError, WorktreeTarget};

/// Read a file as text
pub fn read_text(path: &Path) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|e| CheckError::from(format!("Unable to read {}: {e}", path.display())))
}

/// Parse `setup.cfg` at the root of the working tree
pub fn read_setup_cfg(target: &WorktreeTarget) -> Result<Ini, CheckError> {
    let path = target.file("setup.cfg");
    if !path.is_file() {
        return Err("Repo has no setup.cfg".into());
    }
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };
    let config = Ini::load_from_file_opt(&path, options)
        .map_err(|e| CheckError::from(format!("Unable to parse setup.cfg: {e}")))?;
    debug!(
        "setup.cfg sections: {:?}",
        config.sections().flatten().collect::<Vec<_>>()
    );
    Ok(config)
}

/// Contents of every file matching `pattern` under the working tree root
pub fn read_matching(target: &WorktreeTarget, pattern: &str) -> Result<Vec<String>, CheckError> {
    let root = glob::Pattern::escape(&target.root().to_string_lossy());
    let full = format!("{root}/{pattern}");
    let paths = glob::glob(&full).map_err(|e| CheckError::from(format!("Invalid pattern {pattern}: {e}")))?;

    let mut contents = Vec::new();
    for path in paths.flatten() {
        if path.is_file() {
            debug!("Reading {}", path.display());
            contents.push(read_text(&path)?);
        }
    }
    Ok(contents)
}

/// Contents of all `requirements*` files
pub fn read_requirements(target: &WorktreeTarget) -> Result<Vec<String>, CheckError> {
    read_matching(target, "requirements*")
}

/// Contents of all GitHub workflow files
pub fn read_workflows(target: &WorktreeTarget) -> Result<Vec<String>, CheckError> {
    read_matching(target, ".github/workflows/*")
}

/// Whether any of `contents` contains `needle`
pub fn any_contains(contents: &[String], needle: &str) -> bool {
    contents.iter().any(|c| c.contains(needle))
}

/// Line diff between `actual` and `expected`
///
/// Removed lines start with `- `, added lines with `+ `, unchanged lines
/// with two spaces.
#[must_use]
pub fn ndiff(actual: &str, expected: &str) -> String {
    TextDiff::from_lines(actual, expected)
        .iter_all_changes()
        .map(|change| {
            let sign = match change.tag() {
                ChangeTag::Delete => "- ",
                ChangeTag::Insert => "+ ",
                ChangeTag::Equal => "  ",
            };
            format!("{sign}{}", change.value().trim_end_matches('\n'))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
