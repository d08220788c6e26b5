//! Overlay (.env) file loading.
//!
//! All `dotenvy` calls in the crate go through this module so the
//! `DOTENV_DISABLED` gate cannot be bypassed. Failures are classified into
//! `OverlayFailure` without carrying dotenvy's messages, which may quote the line.

use std::io::ErrorKind;
use std::path::Path;

use super::env::env_var_or_none;
use super::error::OverlayFailure;
use crate::constants::ENV_DOTENV_DISABLED;

/// Check if dotenv loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(ENV_DOTENV_DISABLED).as_deref(),
        Some("true") | Some("1")
    )
}

/// Merge `path` into the process environment.
///
/// Variables already present in the environment are left untouched.
pub(crate) fn load_overlay(path: &Path) -> Result<(), OverlayFailure> {
    dotenvy::from_path(path).map_err(|e| OverlayFailure::from(&e))
}

impl From<&dotenvy::Error> for OverlayFailure {
    fn from(err: &dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound => {
                OverlayFailure::NotFound
            }
            dotenvy::Error::Io(io_err) => OverlayFailure::Io {
                kind: io_err.kind(),
            },
            dotenvy::Error::LineParse(_, idx) => OverlayFailure::Parse { error_index: *idx },
            _ => OverlayFailure::Unknown,
        }
    }
}
