//! Common test utilities for Melodrama integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable the fake package managers append their calls to
pub const CALL_LOG_ENV: &str = "MELODRAMA_TEST_CALL_LOG";

/// A scratch area holding a project directory and fake tools
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory in workspace
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse a `package.json` in workspace
    pub fn read_manifest(&self, project: &str) -> serde_json::Value {
        let json = self.read_file(&format!("{project}/package.json"));
        serde_json::from_str(&json).expect("Manifest is not valid JSON")
    }

    /// Directory holding fake executables
    pub fn bin_dir(&self) -> PathBuf {
        self.path.join(".bin")
    }

    /// Path of the call log written by fake tools
    pub fn call_log(&self) -> PathBuf {
        self.path.join("calls.log")
    }

    /// Lines recorded by fake tools, empty when none ran
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.call_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Install an executable shell script named `name` into the fake bin dir
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.bin_dir();
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        let path = bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// A package manager that logs its arguments, installs a bootstrap
    /// entry point for melodrama-scripts and exits with `code`
    #[cfg(unix)]
    pub fn fake_package_manager(&self, name: &str, code: i32) {
        self.fake_tool(
            name,
            &format!(
                "echo \"{name} $*\" >> \"${CALL_LOG_ENV}\"\n\
                 /bin/mkdir -p node_modules/melodrama-scripts\n\
                 echo 'module.exports = () => {{}};' > node_modules/melodrama-scripts/index.js\n\
                 exit {code}"
            ),
        );
    }

    /// A node binary that logs entry point, directory and verbosity
    #[cfg(unix)]
    pub fn fake_node(&self, code: i32) {
        self.fake_tool(
            "node",
            &format!("echo \"node $3 $4 $5\" >> \"${CALL_LOG_ENV}\"\nexit {code}"),
        );
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn melodrama_cmd() -> Command {
    let mut cmd = Command::cargo_bin("melodrama").expect("Failed to find melodrama binary");
    cmd.env_remove("MELODRAMA_VERBOSE")
        .env_remove("MELODRAMA_INSTALL_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Command running inside `workspace`, seeing only the fake tools on PATH
pub fn melodrama_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = melodrama_cmd();
    cmd.current_dir(&workspace.path)
        .env("PATH", workspace.bin_dir())
        .env(CALL_LOG_ENV, workspace.call_log());
    cmd
}

/// Path of `project` inside `workspace` as the binary will print it
pub fn project_path(workspace: &TestWorkspace, project: &str) -> PathBuf {
    workspace.path.join(project)
}

/// Whether `path` has a manifest
pub fn has_manifest(path: &Path) -> bool {
    path.join("package.json").exists()
}
