//! Configuration loader for environment variables and overlay files.
//!
//! Responsibilities:
//! - Resolve the database connection descriptor from an `EnvSource`.
//! - Resolve the run mode, load dotenv overlay files, and switch the framework mode.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Opening database connections.
//! - Installing logging (the CLI owns the subscriber and its `ModeSwitch`).
//!
//! Invariants / Assumptions:
//! - Overlay files never override variables already present in the process environment.
//! - The `DOTENV_DISABLED` variable is checked before any `dotenvy` call.
//! - Environment values are used verbatim; only unset or empty values count as missing.
//! - The run mode label and container flag are compared exactly.

mod connection;
mod dotenv;
mod env;
mod error;
mod mode_switch;
mod run_mode;

#[cfg(test)]
mod tests;

pub use connection::{ConnectionResolver, format_connection_string, resolve_connection_descriptor};
pub use env::{EnvKeys, EnvSource, ProcessEnv, env_var_or_none};
pub use error::{ConfigError, OverlayFailure};
pub use mode_switch::ModeSwitch;
pub use run_mode::{RunModeLoader, initialize_run_mode};
