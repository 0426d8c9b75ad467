//! File system errors

use std::path::Path;

use super::{MelodramaError, display_path};

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> MelodramaError {
    MelodramaError::FileReadFailed {
        path: display_path(path),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> MelodramaError {
    MelodramaError::FileWriteFailed {
        path: display_path(path),
        reason: reason.to_string(),
    }
}
