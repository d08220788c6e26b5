//! Database connection and run-mode configuration for pgenv.
//!
//! This crate reads environment variables (optionally merged from dotenv
//! overlay files), assembles a key/value database connection string, and
//! resolves whether the application runs in production or development mode.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConnectionResolver, EnvKeys, EnvSource, ModeSwitch, OverlayFailure,
    ProcessEnv, RunModeLoader, env_var_or_none, format_connection_string, initialize_run_mode,
    resolve_connection_descriptor,
};
pub use types::{
    ConnectionDescriptor, DescriptorSummary, FrameworkMode, RunMode, StartupContext,
};
