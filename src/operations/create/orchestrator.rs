//! Main orchestrator for the create operation
//!
//! Steps run one after another and each gates the next. The first failure
//! moves the workflow to [`WorkflowState::Failed`] and is returned as is;
//! nothing written so far is rolled back.

use std::fmt;

use tracing::debug;

use super::config::CreateOptions;
use crate::bootstrap::{Bootstrap, BootstrapContext, BootstrapOptions};
use crate::dependencies::DependencySet;
use crate::error::{Result, install::bootstrap_failed};
use crate::installer::InstallRunner;
use crate::package_manager::{InstallPlan, ToolProbe, select_install_command};
use crate::process::CommandExecutor;
use crate::project::{ProvisionedProject, provision};
use crate::ui::Reporter;

/// Where the workflow currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    DirectoryReady,
    ToolingSelected,
    Installed,
    Bootstrapped,
    Done,
    Failed(String),
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Done | WorkflowState::Failed(_))
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowState::Idle => f.write_str("idle"),
            WorkflowState::DirectoryReady => f.write_str("directory-ready"),
            WorkflowState::ToolingSelected => f.write_str("tooling-selected"),
            WorkflowState::Installed => f.write_str("installed"),
            WorkflowState::Bootstrapped => f.write_str("bootstrapped"),
            WorkflowState::Done => f.write_str("done"),
            WorkflowState::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub project: ProvisionedProject,
    pub dependencies: DependencySet,
    /// `None` when installation was skipped
    pub plan: Option<InstallPlan>,
    pub bootstrapped: bool,
}

/// Runs the create workflow against injected collaborators
pub struct CreateOperation<'a> {
    probe: &'a dyn ToolProbe,
    executor: &'a dyn CommandExecutor,
    bootstrap: Option<&'a dyn Bootstrap>,
    reporter: &'a mut dyn Reporter,
    history: Vec<WorkflowState>,
}

impl<'a> CreateOperation<'a> {
    pub fn new(
        probe: &'a dyn ToolProbe,
        executor: &'a dyn CommandExecutor,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            probe,
            executor,
            bootstrap: None,
            reporter,
            history: vec![WorkflowState::Idle],
        }
    }

    /// Run `bootstrap` after a successful install
    pub fn with_bootstrap(mut self, bootstrap: Option<&'a dyn Bootstrap>) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn state(&self) -> &WorkflowState {
        self.history.last().unwrap_or(&WorkflowState::Idle)
    }

    /// Every state visited so far, starting with `Idle`
    pub fn history(&self) -> &[WorkflowState] {
        &self.history
    }

    /// Run the whole workflow once
    pub fn run(&mut self, options: &CreateOptions) -> Result<CreateOutcome> {
        match self.execute(options) {
            Ok(outcome) => {
                self.reporter
                    .finished(&outcome.project.root, outcome.plan.is_some());
                self.transition(WorkflowState::Done);
                Ok(outcome)
            }
            Err(err) => {
                self.transition(WorkflowState::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    fn execute(&mut self, options: &CreateOptions) -> Result<CreateOutcome> {
        let project = provision(&options.target)?;
        self.transition(WorkflowState::DirectoryReady);
        self.reporter.project_ready(&project.root);

        let dependencies = DependencySet::prepare(&options.dependencies);
        if options.skip_install {
            debug!("skipping dependency installation");
            return Ok(CreateOutcome {
                project,
                dependencies,
                plan: None,
                bootstrapped: false,
            });
        }

        let plan = select_install_command(self.probe, options.verbose)?;
        self.transition(WorkflowState::ToolingSelected);

        InstallRunner::new(self.executor)
            .with_timeout(options.install_timeout)
            .run(
                &plan,
                &dependencies,
                &project.root,
                options.verbose,
                &mut *self.reporter,
            )?;
        self.transition(WorkflowState::Installed);

        let mut bootstrapped = false;
        if let Some(bootstrap) = self.bootstrap {
            self.reporter.bootstrap_started(bootstrap.name());
            let ctx = BootstrapContext {
                target_dir: project.root.clone(),
                options: BootstrapOptions {
                    verbose: options.verbose,
                },
            };
            bootstrap
                .bootstrap(&ctx)
                .map_err(|cause| bootstrap_failed(bootstrap.name(), cause))?;
            self.transition(WorkflowState::Bootstrapped);
            bootstrapped = true;
        }

        Ok(CreateOutcome {
            project,
            dependencies,
            plan: Some(plan),
            bootstrapped,
        })
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!(from = %self.state(), to = %next, "workflow transition");
        self.history.push(next);
    }
}
