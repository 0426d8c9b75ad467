//! Create command implementation
//!
//! Wires the real collaborators (PATH probe, system process executor,
//! Node.js bootstrap, terminal output) into the create operation.

use tracing::debug;

use crate::bootstrap::{Bootstrap, NodeEntryPoint};
use crate::cli::Cli;
use crate::error::Result;
use crate::operations::create::{CreateOperation, CreateOptions};
use crate::package_manager::PathProbe;
use crate::process::SystemCommandExecutor;
use crate::ui::TerminalReporter;

/// Run the create command
pub fn run(cli: &Cli) -> Result<()> {
    let options = CreateOptions::from(cli);
    let probe = PathProbe;
    let executor = SystemCommandExecutor;
    let bootstrap = options
        .bootstrap_package()
        .map(|package| NodeEntryPoint::new(package, &probe, &executor));
    let mut reporter = TerminalReporter::new();

    println!();
    let mut operation = CreateOperation::new(&probe, &executor, &mut reporter)
        .with_bootstrap(bootstrap.as_ref().map(|b| b as &dyn Bootstrap));
    let outcome = operation.run(&options)?;
    debug_assert!(operation.state().is_terminal());
    debug!(
        root = %outcome.project.root.display(),
        packages = outcome.dependencies.len(),
        manager = ?outcome.plan.as_ref().map(|plan| plan.manager),
        bootstrapped = outcome.bootstrapped,
        states = ?operation.history(),
        "create finished"
    );

    Ok(())
}
