//! High-level operations
//!
//! - CreateOperation: provision, install and bootstrap a presentation
//!
//! The operation coordinates with:
//! - Project: directory provisioning (from project module)
//! - Package manager: install command selection (from package_manager module)
//! - Installer: running the install (from installer module)
//! - Bootstrap: post-install setup (from bootstrap module)
//! - UI: progress reporting (from ui module)

pub mod create;
