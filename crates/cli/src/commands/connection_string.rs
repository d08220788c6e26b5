//! Connection string command implementation.

use anyhow::Result;
use pgenv_config::{
    ConfigError, ProcessEnv, StartupContext, format_connection_string,
    resolve_connection_descriptor,
};
use tracing::info;

use crate::args::ModeArg;

pub fn run(startup: &StartupContext, mode: Option<ModeArg>, redact: bool) -> Result<()> {
    let mode = super::effective_mode(startup, mode);
    info!("Resolving connection string for {} mode", mode);

    let rendered = if redact {
        resolve_connection_descriptor(&ProcessEnv, mode)
            .map_err(|e| ConfigError::Configuration(Box::new(e)))?
            .to_redacted_string()
    } else {
        format_connection_string(&ProcessEnv, mode)?
    };

    println!("{}", rendered);
    Ok(())
}
