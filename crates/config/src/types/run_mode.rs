//! Run mode and startup context types.

use std::fmt;

use crate::constants::{DEVELOPMENT_LABEL, PRODUCTION_LABEL};
use crate::loader::{ConfigError, EnvSource, format_connection_string};

/// Whether the application runs with production or development behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunMode {
    Production,
    Development,
}

/// Runtime mode applied to the web framework collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkMode {
    /// Quiet output for production.
    Release,
    /// Verbose output for development.
    Debug,
}

impl RunMode {
    /// Parse a run mode label.
    ///
    /// Only the exact label `production` selects [`RunMode::Production`];
    /// every other value, including an empty one, selects development.
    pub fn from_label(label: &str) -> Self {
        if label == PRODUCTION_LABEL {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// The canonical label, `production` or `development`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_LABEL,
            Self::Development => DEVELOPMENT_LABEL,
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Framework mode that accompanies this run mode.
    pub const fn framework_mode(self) -> FrameworkMode {
        match self {
            Self::Production => FrameworkMode::Release,
            Self::Development => FrameworkMode::Debug,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FrameworkMode {
    /// Log filter directive matching this mode's verbosity.
    pub const fn default_log_filter(self) -> &'static str {
        match self {
            Self::Release => "info",
            Self::Debug => "debug",
        }
    }
}

/// Result of run mode initialization.
///
/// Passed to whatever needs the resolved mode instead of keeping it in a
/// process-wide global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupContext {
    run_mode: RunMode,
}

impl StartupContext {
    pub fn new(run_mode: RunMode) -> Self {
        Self { run_mode }
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Format the connection string for the resolved run mode.
    pub fn connection_string<E>(&self, env: &E) -> Result<String, ConfigError>
    where
        E: EnvSource + ?Sized,
    {
        format_connection_string(env, self.run_mode)
    }
}
