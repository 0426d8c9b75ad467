//! Package manager invocation

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::dependencies::DependencySet;
use crate::error::{Result, install::failed};
use crate::package_manager::InstallPlan;
use crate::process::{CommandExecutor, Invocation, OutputMode, ProcessResult};
use crate::ui::Reporter;

/// Number of trailing stderr lines logged when a quiet install fails.
const STDERR_TAIL_LINES: usize = 20;

/// Spawns one install per call and turns a non-zero exit into an error
pub struct InstallRunner<'a> {
    executor: &'a dyn CommandExecutor,
    timeout: Option<Duration>,
}

impl<'a> InstallRunner<'a> {
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self {
            executor,
            timeout: None,
        }
    }

    /// Kill the install once it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the invocation for `plan` + `dependencies` without running it
    pub fn invocation(
        &self,
        plan: &InstallPlan,
        dependencies: &DependencySet,
        cwd: &Path,
        verbose: bool,
    ) -> Invocation {
        let output = if verbose {
            OutputMode::Inherit
        } else {
            OutputMode::Capture
        };
        Invocation::new(plan.command.clone(), plan.arguments_for(dependencies.as_slice()))
            .current_dir(cwd)
            .output(output)
            .timeout(self.timeout)
    }

    /// Install `dependencies` with `plan` inside `cwd`.
    ///
    /// # Errors
    ///
    /// `InstallFailed` carrying the exit code when the package manager exits
    /// non-zero, `InstallTimedOut` when the timeout elapses, and
    /// `ToolingUnavailable` when the binary cannot be spawned.
    pub fn run(
        &self,
        plan: &InstallPlan,
        dependencies: &DependencySet,
        cwd: &Path,
        verbose: bool,
        reporter: &mut dyn Reporter,
    ) -> Result<ProcessResult> {
        if dependencies.is_empty() {
            debug!("no dependencies to install");
            return Ok(ProcessResult {
                exit_code: Some(0),
                ..ProcessResult::default()
            });
        }

        let invocation = self.invocation(plan, dependencies, cwd, verbose);
        reporter.install_started(&invocation, verbose);

        let result = match self.executor.execute(&invocation) {
            Ok(result) => result,
            Err(err) => {
                reporter.install_finished(false);
                return Err(err);
            }
        };

        reporter.install_finished(result.success());
        if !result.success() {
            log_stderr_tail(&result);
            return Err(failed(invocation.to_string(), result.exit_code));
        }

        Ok(result)
    }
}

fn log_stderr_tail(result: &ProcessResult) {
    let Some(stderr) = result.stderr.as_deref() else {
        return;
    };
    let lines: Vec<&str> = stderr.lines().collect();
    let tail = &lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..];
    for line in tail {
        warn!(target: "melodrama::install", "{line}");
    }
}
