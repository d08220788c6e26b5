//! Run mode initialization.
//!
//! Responsibilities:
//! - Load the default overlay file best-effort.
//! - Read the application environment and decide the run mode.
//! - Apply the matching framework mode through a `ModeSwitch`.
//! - Load the development overlay, which is mandatory outside production.
//!
//! Does NOT handle:
//! - Connection descriptor resolution (see connection.rs).
//!
//! Invariants / Assumptions:
//! - The result is always exactly production or development.
//! - The default overlay is loaded before the application environment is read, so it
//!   can supply `APP_ENV`.
//! - With overlays disabled (`DOTENV_DISABLED` or `without_overlays()`), the development
//!   branch succeeds without touching the filesystem.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::dotenv::{dotenv_disabled, load_overlay};
use super::env::{EnvKeys, EnvSource, ProcessEnv, non_empty};
use super::error::{ConfigError, OverlayFailure};
use super::mode_switch::ModeSwitch;
use crate::constants::{DEFAULT_OVERLAY_PATH, DEVELOPMENT_OVERLAY_PATH};
use crate::types::{RunMode, StartupContext};

/// Builder for run mode initialization.
#[derive(Debug, Clone)]
pub struct RunModeLoader {
    app_env_key: String,
    default_overlay: PathBuf,
    development_overlay: PathBuf,
    overlays_enabled: bool,
}

impl Default for RunModeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RunModeLoader {
    /// Create a loader with the default overlay paths (`.env` and `../.env`).
    pub fn new() -> Self {
        Self {
            app_env_key: EnvKeys::default().app_env,
            default_overlay: PathBuf::from(DEFAULT_OVERLAY_PATH),
            development_overlay: PathBuf::from(DEVELOPMENT_OVERLAY_PATH),
            overlays_enabled: true,
        }
    }

    /// Read the application environment from the variable named in `keys`.
    pub fn with_keys(mut self, keys: &EnvKeys) -> Self {
        self.app_env_key = keys.app_env.clone();
        self
    }

    /// Override the best-effort overlay path.
    pub fn with_default_overlay(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_overlay = path.into();
        self
    }

    /// Override the overlay path that must load in development.
    pub fn with_development_overlay(mut self, path: impl Into<PathBuf>) -> Self {
        self.development_overlay = path.into();
        self
    }

    /// Skip all overlay loading.
    pub fn without_overlays(mut self) -> Self {
        self.overlays_enabled = false;
        self
    }

    pub fn default_overlay(&self) -> &Path {
        &self.default_overlay
    }

    pub fn development_overlay(&self) -> &Path {
        &self.development_overlay
    }

    fn overlays_enabled(&self) -> bool {
        self.overlays_enabled && !dotenv_disabled()
    }

    /// Resolve the run mode and apply it to `framework`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFileLoad` if the run mode is development and the
    /// development overlay cannot be loaded. A failure to load the default overlay
    /// is only logged.
    pub fn init<E, M>(&self, env: &E, framework: &M) -> Result<StartupContext, ConfigError>
    where
        E: EnvSource + ?Sized,
        M: ModeSwitch + ?Sized,
    {
        let overlays = self.overlays_enabled();
        if overlays {
            self.load_default_overlay();
        } else {
            debug!("Overlay loading disabled");
        }

        let label = non_empty(env, &self.app_env_key).unwrap_or_default();
        let mode = RunMode::from_label(&label);
        framework.set_mode(mode.framework_mode());

        match mode {
            RunMode::Production => info!("Production config"),
            RunMode::Development => {
                info!("Development config");
                if overlays {
                    load_overlay(&self.development_overlay).map_err(|cause| {
                        ConfigError::EnvFileLoad {
                            path: self.development_overlay.clone(),
                            cause,
                        }
                    })?;
                    debug!(path = %self.development_overlay.display(), "Loaded development overlay");
                }
            }
        }

        Ok(StartupContext::new(mode))
    }

    fn load_default_overlay(&self) {
        let path = self.default_overlay.display();
        match load_overlay(&self.default_overlay) {
            Ok(()) => debug!(%path, "Loaded overlay"),
            Err(OverlayFailure::NotFound) => info!(%path, "No overlay file found"),
            Err(cause) => warn!(%path, %cause, "Could not load overlay file"),
        }
    }
}

/// Initialize the run mode from the process environment with the default overlays.
pub fn initialize_run_mode<M>(framework: &M) -> Result<StartupContext, ConfigError>
where
    M: ModeSwitch + ?Sized,
{
    RunModeLoader::new().init(&ProcessEnv, framework)
}
