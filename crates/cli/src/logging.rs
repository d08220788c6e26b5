//! Logging setup and the log-level `ModeSwitch`.
//!
//! Responsibilities:
//! - Install the global tracing subscriber (stderr, text or JSON).
//! - Switch the log filter when the run mode is applied.
//!
//! Invariants:
//! - Logs never go to stdout; stdout carries command results only.
//! - An explicit `RUST_LOG` always wins over the run mode's filter.

use pgenv_config::{FrameworkMode, ModeSwitch};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use crate::args::LogFormat;

/// Applies framework modes by reloading the log filter.
pub struct LogModeSwitch {
    handle: reload::Handle<EnvFilter, Registry>,
    explicit_filter: bool,
}

/// Install the global subscriber and return the switch that controls its filter.
pub fn init(format: LogFormat) -> LogModeSwitch {
    let explicit_filter = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let initial = if explicit_filter {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(FrameworkMode::Release.default_log_filter())
    };

    let (filter, handle) = reload::Layer::new(initial);
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    LogModeSwitch {
        handle,
        explicit_filter,
    }
}

impl ModeSwitch for LogModeSwitch {
    fn set_mode(&self, mode: FrameworkMode) {
        if self.explicit_filter {
            return;
        }
        if let Err(e) = self
            .handle
            .reload(EnvFilter::new(mode.default_log_filter()))
        {
            tracing::warn!("Failed to switch log filter: {}", e);
        }
    }
}
