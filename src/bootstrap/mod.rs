//! Post-install bootstrap
//!
//! After the install succeeds, a freshly installed package may finish
//! setting up the project. The workflow only knows the [`Bootstrap`]
//! contract: it hands over the project directory and verbosity and
//! propagates success or failure. How the package's code is located and
//! run is up to the implementation, see [`NodeEntryPoint`].

mod node;

use std::path::PathBuf;

pub use node::NodeEntryPoint;

use crate::error::BoxedCause;

/// Options passed through to the bootstrap step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub verbose: bool,
}

/// Everything a bootstrap step is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapContext {
    pub target_dir: PathBuf,
    pub options: BootstrapOptions,
}

/// A post-install initialization routine supplied by an installed package
pub trait Bootstrap {
    /// Name of the package providing the routine
    fn name(&self) -> &str;

    /// Run the routine. Errors are opaque to the caller and are only wrapped
    /// and reported.
    fn bootstrap(&self, ctx: &BootstrapContext) -> std::result::Result<(), BoxedCause>;
}
