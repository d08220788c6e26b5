//! Mode command implementation.

use anyhow::Result;
use pgenv_config::StartupContext;

pub fn run(startup: &StartupContext) -> Result<()> {
    println!("{}", startup.run_mode());
    Ok(())
}
