//! Command implementations for the Melodrama CLI

pub mod create;
