//! Dependency installation
//!
//! Runs the selected package manager against the dependency list inside
//! the project directory. Verbose runs inherit the child's output; quiet
//! runs capture it and show a spinner instead.

pub mod runner;

pub use runner::InstallRunner;
