//! Directory provisioning
//!
//! Refuses to touch a directory holding anything outside the allow-list,
//! otherwise creates it (with missing parents) and writes the manifest.
//! A `package.json` byte-identical to the one we would write is not a
//! conflict, so re-running on a directory we provisioned is a no-op rewrite.
//!
//! The target is made absolute and `.`/`..` are folded lexically before
//! anything is checked, so the directory that is checked is the one that
//! gets written.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::conflicts::{conflicting_entries, has_conflicts};
use super::manifest::{MANIFEST_FILE, Manifest};
use crate::error::{
    Result,
    fs::{read_failed, write_failed},
    project::conflict,
};

/// Fallback name when the directory has no final path component.
const FALLBACK_NAME: &str = "presentation";

/// A project directory ready for dependency installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedProject {
    /// Absolute, canonical project root
    pub root: PathBuf,
    /// The manifest that was written
    pub manifest: Manifest,
}

/// Provision `path` as a presentation project.
///
/// Nothing is written when the directory has conflicting entries.
pub fn provision(path: &Path) -> Result<ProvisionedProject> {
    let target = resolve_target(path)?;
    let manifest = Manifest::new(project_name(&target));

    if target.exists() && has_conflicts(&target)? {
        let conflicts: Vec<String> = conflicting_entries(&target)?
            .into_iter()
            .filter(|entry| !(entry == MANIFEST_FILE && holds_manifest(&target, &manifest)))
            .collect();
        if !conflicts.is_empty() {
            debug!(path = %target.display(), ?conflicts, "refusing to provision");
            return Err(conflict(&target, &conflicts));
        }
    }

    fs::create_dir_all(&target).map_err(|e| write_failed(&target, e))?;
    let root = dunce::canonicalize(&target).map_err(|e| read_failed(&target, e))?;

    manifest.write_to(&root)?;
    debug!(path = %root.display(), name = %manifest.name, "wrote manifest");

    Ok(ProvisionedProject { root, manifest })
}

/// Whether `dir` already holds exactly the manifest we would write
fn holds_manifest(dir: &Path, expected: &Manifest) -> bool {
    let Ok(existing) = fs::read_to_string(dir.join(MANIFEST_FILE)) else {
        return false;
    };
    expected.to_json().is_ok_and(|json| json == existing)
}

/// Resolve `path` against the current directory and fold `.` and `..`
/// without touching the file system
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| read_failed(path, e))?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Infer the project name from the directory's base name
pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}
