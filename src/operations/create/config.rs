//! Configuration for the create operation

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::dependencies::DependencyOptions;

/// Options for the create workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Directory to provision, relative paths resolve against the current directory
    pub target: PathBuf,
    pub verbose: bool,
    /// Stop after writing the manifest
    pub skip_install: bool,
    /// Run the preset's bootstrap package after installing
    pub bootstrap: bool,
    pub dependencies: DependencyOptions,
    pub install_timeout: Option<Duration>,
}

impl From<&Cli> for CreateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            target: cli.dir.clone(),
            verbose: cli.verbose,
            skip_install: cli.skip_install,
            bootstrap: !cli.no_bootstrap,
            dependencies: DependencyOptions {
                preset: cli.preset,
                syntax: cli.syntax,
                theme: cli.theme.clone(),
            },
            install_timeout: cli.install_timeout.map(Duration::from_secs),
        }
    }
}

impl CreateOptions {
    /// Package to bootstrap after install, if any
    pub fn bootstrap_package(&self) -> Option<&'static str> {
        if self.skip_install || !self.bootstrap {
            return None;
        }
        self.dependencies.preset.bootstrap_package()
    }
}
