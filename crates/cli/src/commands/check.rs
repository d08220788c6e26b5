//! Check command implementation.

use anyhow::{Context, Result};
use pgenv_config::{
    DescriptorSummary, ProcessEnv, RunMode, StartupContext, resolve_connection_descriptor,
};
use serde::Serialize;
use tracing::info;

use crate::args::{ModeArg, OutputFormat};

#[derive(Serialize)]
struct CheckReport {
    run_mode: &'static str,
    connection: DescriptorSummary,
}

pub fn run(startup: &StartupContext, mode: Option<ModeArg>, output: OutputFormat) -> Result<()> {
    let mode = super::effective_mode(startup, mode);
    info!("Checking connection settings for {} mode", mode);

    let descriptor = resolve_connection_descriptor(&ProcessEnv, mode)?;
    let report = CheckReport {
        run_mode: mode.as_str(),
        connection: descriptor.summary(),
    };

    let rendered = match output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize check report")?
        }
        OutputFormat::Text => format_text(mode, &report.connection),
    };
    println!("{}", rendered);
    Ok(())
}

fn format_text(mode: RunMode, summary: &DescriptorSummary) -> String {
    [
        ("run_mode", mode.as_str()),
        ("user", summary.user.as_str()),
        ("dbname", summary.dbname.as_str()),
        ("host", summary.host.as_str()),
        ("port", summary.port.as_str()),
        ("sslmode", summary.sslmode.as_str()),
    ]
    .iter()
    .map(|(key, value)| format!("{:<10}{}", format!("{key}:"), value))
    .collect::<Vec<_>>()
    .join("\n")
}
