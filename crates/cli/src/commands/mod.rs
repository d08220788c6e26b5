//! CLI command implementations.

pub mod check;
pub mod connection_string;
pub mod mode;

use pgenv_config::{RunMode, StartupContext};

use crate::args::ModeArg;

/// Mode to resolve for: the `--mode` override if given, else the initialized mode.
pub(crate) fn effective_mode(startup: &StartupContext, mode: Option<ModeArg>) -> RunMode {
    mode.map(RunMode::from).unwrap_or(startup.run_mode())
}
