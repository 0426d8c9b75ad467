//! Colored terminal output for the create workflow

use std::path::Path;

use console::Style;

use super::Reporter;
use crate::process::Invocation;
use crate::progress::InstallSpinner;

/// Prints status lines to stdout and spins during quiet installs
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Option<InstallSpinner>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for TerminalReporter {
    fn project_ready(&mut self, root: &Path) {
        println!(
            "{} {}",
            Style::new().green().apply_to("Folder created at"),
            Style::new().green().italic().apply_to(root.display())
        );
    }

    fn install_started(&mut self, invocation: &Invocation, verbose: bool) {
        if verbose {
            println!(
                "{} {}",
                Style::new().dim().apply_to("Installing dependencies with"),
                Style::new().cyan().apply_to(invocation)
            );
            return;
        }
        self.spinner = Some(InstallSpinner::start(
            Style::new()
                .dim()
                .apply_to("Installing dependencies. This may take a while...")
                .to_string(),
        ));
    }

    fn install_finished(&mut self, success: bool) {
        let spinner = self.spinner.take();
        match (spinner, success) {
            (Some(spinner), true) => spinner.succeed("Installation complete!"),
            (Some(spinner), false) => spinner.fail(
                Style::new()
                    .red()
                    .apply_to("Installation failed!")
                    .to_string(),
            ),
            (None, true) => println!("{}", Style::new().green().apply_to("Installation complete!")),
            (None, false) => println!("{}", Style::new().red().apply_to("Installation failed!")),
        }
    }

    fn bootstrap_started(&mut self, package: &str) {
        println!(
            "{} {}",
            Style::new().dim().apply_to("Bootstrapping with"),
            Style::new().cyan().apply_to(package)
        );
    }

    fn finished(&mut self, root: &Path, installed: bool) {
        println!();
        let headline = if installed {
            "Your presentation is ready in"
        } else {
            "Presentation folder prepared in"
        };
        println!(
            "{} {}",
            Style::new().bold().green().apply_to(headline),
            Style::new().bold().apply_to(root.display())
        );
    }
}
