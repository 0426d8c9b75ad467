//! Presentation project directory
//!
//! A project directory is provisioned by checking it for conflicting
//! entries, creating it if needed and writing a minimal `package.json`.

pub mod conflicts;
pub mod manifest;
pub mod provision;

pub use provision::{ProvisionedProject, provision};
