//! Conflict detection for pre-existing directory contents

use std::fs;
use std::path::Path;

use crate::error::{Result, fs::read_failed};

/// Entries allowed to coexist with a freshly provisioned project.
pub const ALLOWED_ENTRIES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    ".git",
    ".gitignore",
    ".idea",
    ".vscode",
    "README.md",
    "LICENSE",
];

/// Returns the immediate entries of `dir` that are not on the allow-list, sorted by name.
pub fn conflicting_entries(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| read_failed(dir, e))?;

    let mut conflicts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| read_failed(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !ALLOWED_ENTRIES.contains(&name.as_str()) {
            conflicts.push(name);
        }
    }
    conflicts.sort();

    Ok(conflicts)
}

/// Check whether `dir` holds anything outside the allow-list
pub fn has_conflicts(dir: &Path) -> Result<bool> {
    Ok(!conflicting_entries(dir)?.is_empty())
}
