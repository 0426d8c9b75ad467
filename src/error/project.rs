//! Directory provisioning errors

use std::path::Path;

use super::{MelodramaError, display_path};

/// Creates a directory conflict error listing the offending entries
pub fn conflict(path: &Path, entries: &[String]) -> MelodramaError {
    MelodramaError::DirectoryConflict {
        path: display_path(path),
        entries: entries.join(", "),
    }
}
