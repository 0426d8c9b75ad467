//! Create operation
//!
//! Provisions the project directory, selects a package manager, installs
//! the dependencies and runs the bootstrap step, strictly in that order.

pub mod config;
pub mod orchestrator;

pub use config::CreateOptions;
pub use orchestrator::{CreateOperation, CreateOutcome, WorkflowState};
