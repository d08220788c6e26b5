//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for connection resolution and overlay loading failures.
//!
//! Invariants:
//! - Missing-variable errors name the variables, never their values.
//! - Overlay errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required connection values are unset or empty.
    #[error(
        "One or more required DB environment variables are not set: {}",
        .missing.join(", ")
    )]
    MissingConfiguration { missing: Vec<String> },

    /// The connection descriptor could not be resolved; the cause is the source.
    #[error("Failed to load database connection configuration")]
    Configuration(#[source] Box<ConfigError>),

    /// A mandatory overlay file could not be loaded.
    #[error(
        "Failed to load environment file at {}: {cause}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    EnvFileLoad { path: PathBuf, cause: OverlayFailure },
}

impl ConfigError {
    /// Names of the missing variables, if this error (or its cause) reports any.
    pub fn missing_variables(&self) -> Option<&[String]> {
        match self {
            ConfigError::MissingConfiguration { missing } => Some(missing),
            ConfigError::Configuration(inner) => inner.missing_variables(),
            ConfigError::EnvFileLoad { .. } => None,
        }
    }
}

/// Why an overlay file failed to load.
///
/// SAFETY: Parse failures only carry the byte index, NOT the offending line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayFailure {
    #[error("file not found")]
    NotFound,

    #[error("parse error at position {error_index}")]
    Parse { error_index: usize },

    #[error("read failed ({kind})")]
    Io { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("unknown error")]
    Unknown,
}
