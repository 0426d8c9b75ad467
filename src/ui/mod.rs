//! Progress presentation layer
//!
//! The workflow reports what it is doing through the [`Reporter`] trait:
//! - [`TerminalReporter`]: colored status lines and an install spinner
//! - [`SilentReporter`]: no output, for tests

mod terminal;

use std::path::Path;

pub use terminal::TerminalReporter;

use crate::process::Invocation;

/// Receives workflow progress events
pub trait Reporter {
    /// The project directory exists and holds its manifest
    fn project_ready(&mut self, root: &Path);

    /// A package manager install is about to start
    fn install_started(&mut self, invocation: &Invocation, verbose: bool);

    /// The install finished, successfully or not
    fn install_finished(&mut self, success: bool);

    /// The post-install bootstrap of `package` is about to start
    fn bootstrap_started(&mut self, package: &str);

    /// The whole workflow completed
    fn finished(&mut self, root: &Path, installed: bool);
}

/// Reporter that prints nothing
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn project_ready(&mut self, _root: &Path) {}

    fn install_started(&mut self, _invocation: &Invocation, _verbose: bool) {}

    fn install_finished(&mut self, _success: bool) {}

    fn bootstrap_started(&mut self, _package: &str) {}

    fn finished(&mut self, _root: &Path, _installed: bool) {}
}
