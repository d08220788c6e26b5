//! pgenv - print the run mode and database connection string for this environment.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install logging and hand its filter to run mode initialization as the `ModeSwitch`.
//! - Execute the requested command against the resolved startup context.
//!
//! Does NOT handle:
//! - Environment resolution rules (see `crates/config`).
//!
//! Invariants:
//! - Run mode initialization (and overlay loading) happens BEFORE any command reads
//!   connection variables, so overlays can supply them.
//! - Results go to stdout; logs and errors go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;
mod logging;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use pgenv_config::{ProcessEnv, RunModeLoader};

fn main() {
    let cli = Cli::parse();

    let mode_switch = logging::init(cli.log_format);

    let startup = match RunModeLoader::new().init(&ProcessEnv, &mode_switch) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Failed to initialize run mode: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let code = match run_command(cli.command, &startup) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}
