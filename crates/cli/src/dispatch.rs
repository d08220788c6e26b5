//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Run mode initialization (see `main()`).

use anyhow::Result;
use pgenv_config::StartupContext;

use crate::args::Commands;
use crate::commands;

/// Dispatch a subcommand with the startup context resolved in `main()`.
pub(crate) fn run_command(command: Commands, startup: &StartupContext) -> Result<()> {
    match command {
        Commands::Mode => commands::mode::run(startup),
        Commands::ConnectionString { mode, redact } => {
            commands::connection_string::run(startup, mode, redact)
        }
        Commands::Check { mode, output } => commands::check::run(startup, mode, output),
    }
}
