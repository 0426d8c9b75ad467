//! Detection of package manager binaries on `PATH`

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, install::tooling_unavailable};

/// Resolves executables to the path that should be spawned
pub trait ToolProbe {
    /// `Ok(None)` means "not installed", which is a normal outcome.
    /// `Err` means the lookup itself could not be performed.
    fn probe(&self, program: &str) -> Result<Option<PathBuf>>;
}

/// Resolves executables against the process `PATH`
///
/// On Windows this honours `PATHEXT`, so `yarn` resolves to `yarn.cmd` and
/// the shim is what gets spawned.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn probe(&self, program: &str) -> Result<Option<PathBuf>> {
        match which::which(program) {
            Ok(path) => {
                debug!(program, path = %path.display(), "found executable");
                Ok(Some(path))
            }
            Err(which::Error::CannotFindBinaryPath) => {
                debug!(program, "executable not found");
                Ok(None)
            }
            Err(err) => Err(tooling_unavailable(program, err)),
        }
    }
}
