//! pfa-cli library root.
//!
//! Re-exports the config and command modules so integration tests can
//! exercise them without spawning the `pfa-screen` binary.

pub mod commands;
pub mod config;
