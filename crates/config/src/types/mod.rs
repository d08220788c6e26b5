//! Configuration type definitions for pgenv.
//!
//! Responsibilities:
//! - Define the database `ConnectionDescriptor` and its renderings.
//! - Define the run mode, the framework mode it maps to, and the startup context.
//!
//! Does NOT handle:
//! - Reading environment variables or overlay files (see `loader` module).
//!
//! Invariants:
//! - The password is held as `secrecy::SecretString` and never appears in `Debug` output.
//! - Run mode labels are exactly `production` and `development`.

pub(crate) mod connection;
mod run_mode;

pub use connection::{ConnectionDescriptor, DescriptorSummary};
pub use run_mode::{FrameworkMode, RunMode, StartupContext};
