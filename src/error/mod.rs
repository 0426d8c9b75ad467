//! Error types and handling for Melodrama
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`project`]: Directory provisioning errors
//! - [`install`]: Package manager and install errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod install;
pub mod project;

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Boxed cause carried by errors raised outside the core workflow.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for Melodrama operations
#[derive(Error, Diagnostic, Debug)]
pub enum MelodramaError {
    // Project errors
    #[error("Directory {path} contains files that could conflict")]
    #[diagnostic(
        code(melodrama::project::conflict),
        help("Please choose another one, or remove the files listed: {entries}")
    )]
    DirectoryConflict { path: String, entries: String },

    // Install errors
    #[error("Unable to look up {tool} on PATH: {reason}")]
    #[diagnostic(code(melodrama::install::tooling_unavailable))]
    ToolingUnavailable { tool: String, reason: String },

    #[error("Installation failed: `{command}` exited with {}", describe_exit(.exit_code))]
    #[diagnostic(
        code(melodrama::install::failed),
        help("Re-run with --verbose to see the package manager output")
    )]
    InstallFailed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Installation timed out: `{command}` did not finish within {seconds} seconds")]
    #[diagnostic(
        code(melodrama::install::timed_out),
        help("Raise --install-timeout or check your network connection")
    )]
    InstallTimedOut { command: String, seconds: u64 },

    // Bootstrap errors
    #[error("Bootstrap of {package} failed")]
    #[diagnostic(code(melodrama::bootstrap::failed))]
    BootstrapFailed {
        package: String,
        #[source]
        source: BoxedCause,
    },

    #[error("Bootstrap entry point not found: {path}")]
    #[diagnostic(
        code(melodrama::bootstrap::entry_point_not_found),
        help("The installed package does not ship the expected entry point")
    )]
    BootstrapEntryPointNotFound { path: String },

    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(melodrama::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(melodrama::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(melodrama::fs::io_error))]
    IoError { message: String },
}

impl MelodramaError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<std::io::Error> for MelodramaError {
    fn from(err: std::io::Error) -> Self {
        MelodramaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MelodramaError {
    fn from(err: serde_json::Error) -> Self {
        MelodramaError::IoError {
            message: format!("invalid JSON: {err}"),
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MelodramaError>;
