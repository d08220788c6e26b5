//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use pgenv_config::RunMode;

#[derive(Parser)]
#[command(name = "pgenv")]
#[command(about = "Resolve the run mode and database connection string from the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pgenv mode\n  pgenv connection-string\n  pgenv connection-string --mode production --redact\n  pgenv check -o json\n"
)]
pub struct Cli {
    /// Log output format (logs always go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the run mode and print its label
    Mode,

    /// Print the database connection string
    ConnectionString {
        /// Resolve for this mode instead of the initialized one
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Replace the password with a placeholder
        #[arg(long)]
        redact: bool,
    },

    /// Resolve the connection settings and print them without the password
    Check {
        /// Resolve for this mode instead of the initialized one
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Production,
    Development,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Production => RunMode::Production,
            ModeArg::Development => RunMode::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
