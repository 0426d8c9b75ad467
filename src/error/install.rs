//! Package manager, install and bootstrap errors

use std::path::Path;

use super::{BoxedCause, MelodramaError, display_path};

/// Creates a tooling unavailable error
pub fn tooling_unavailable(tool: impl Into<String>, reason: impl ToString) -> MelodramaError {
    MelodramaError::ToolingUnavailable {
        tool: tool.into(),
        reason: reason.to_string(),
    }
}

/// Creates an install failed error
pub fn failed(command: impl Into<String>, exit_code: Option<i32>) -> MelodramaError {
    MelodramaError::InstallFailed {
        command: command.into(),
        exit_code,
    }
}

/// Creates an install timed out error
pub fn timed_out(command: impl Into<String>, seconds: u64) -> MelodramaError {
    MelodramaError::InstallTimedOut {
        command: command.into(),
        seconds,
    }
}

/// Wraps whatever a bootstrap step raised
pub fn bootstrap_failed(package: impl Into<String>, source: impl Into<BoxedCause>) -> MelodramaError {
    MelodramaError::BootstrapFailed {
        package: package.into(),
        source: source.into(),
    }
}

/// Creates a bootstrap entry point not found error
pub fn entry_point_not_found(path: &Path) -> MelodramaError {
    MelodramaError::BootstrapEntryPointNotFound {
        path: display_path(path),
    }
}
