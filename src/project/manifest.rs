//! The `package.json` written into a new project

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, fs::write_failed};

/// File name of the manifest inside the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Version every new project starts at.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Minimal package descriptor for a presentation project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,
}

impl Manifest {
    /// Create the manifest for a project called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            private: true,
        }
    }

    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest into `dir`, replacing any previous one
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|e| write_failed(&path, e))
    }
}
