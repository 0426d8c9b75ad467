//! Package manager selection
//!
//! Probing for a binary lives in [`probe`]; turning the probe result into
//! an [`InstallPlan`] is a pure function so the choice can be tested
//! without touching `PATH`.

pub mod probe;

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

pub use probe::{PathProbe, ToolProbe};

use crate::error::Result;

/// Package managers melodrama knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Package manager binary plus its base flags, before dependency names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub manager: PackageManager,
    /// Resolved executable, or the bare program name when lookup found nothing
    pub command: PathBuf,
    pub args: Vec<String>,
}

impl InstallPlan {
    /// Pick the plan for a given probe outcome.
    ///
    /// Yarn adds exact dev dependencies. The npm fallback installs exact dev
    /// dependencies and gets `--verbose` when requested. An unresolved npm
    /// is still planned by name and fails when spawned.
    pub fn for_probe(yarn: Option<PathBuf>, npm: Option<PathBuf>, verbose: bool) -> Self {
        let (manager, resolved, mut args) = match yarn {
            Some(path) => (
                PackageManager::Yarn,
                Some(path),
                vec!["add", "--dev", "--exact"],
            ),
            None => (PackageManager::Npm, npm, vec!["install", "--DE"]),
        };
        if manager == PackageManager::Npm && verbose {
            args.push("--verbose");
        }

        Self {
            manager,
            command: resolved.unwrap_or_else(|| PathBuf::from(manager.program())),
            args: args.into_iter().map(String::from).collect(),
        }
    }

    /// Full argument vector with `packages` appended after the base flags
    pub fn arguments_for<S: AsRef<str>>(&self, packages: &[S]) -> Vec<String> {
        self.args
            .iter()
            .cloned()
            .chain(packages.iter().map(|p| p.as_ref().to_string()))
            .collect()
    }
}

/// Probe for yarn, then npm, and select the install command.
///
/// Yarn being absent selects npm; only a failing probe is an error.
pub fn select_install_command(probe: &dyn ToolProbe, verbose: bool) -> Result<InstallPlan> {
    let yarn = probe.probe(PackageManager::Yarn.program())?;
    let npm = match yarn {
        Some(_) => None,
        None => probe.probe(PackageManager::Npm.program())?,
    };
    let plan = InstallPlan::for_probe(yarn, npm, verbose);
    debug!(
        manager = %plan.manager,
        command = %plan.command.display(),
        args = ?plan.args,
        "selected package manager"
    );
    Ok(plan)
}
