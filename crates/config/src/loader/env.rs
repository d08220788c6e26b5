//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Define the `EnvSource` lookup seam so callers can supply fixed mappings.
//! - Define `EnvKeys`, the variable names the loader reads.
//! - Provide helpers for reading variables.
//!
//! Does NOT handle:
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - Configuration values are returned verbatim; only unset or empty values count as missing.
//! - `env_var_or_none` trims, and is only used for process-level switches like `DOTENV_DISABLED`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::constants::{
    ENV_APP_ENV, ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_SSLMODE,
    ENV_DB_USER, ENV_IS_DOCKER,
};

/// Key/value lookup the loader reads configuration from.
pub trait EnvSource {
    /// Raw value for `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Names of the environment variables the loader reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvKeys {
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
    pub host: String,
    pub port: String,
    /// Container flag; the value `true` enables the container branch outside production.
    pub container_flag: String,
    /// Application environment; the value `production` selects production mode.
    pub app_env: String,
}

impl Default for EnvKeys {
    fn default() -> Self {
        Self {
            user: ENV_DB_USER.to_string(),
            password: ENV_DB_PASSWORD.to_string(),
            dbname: ENV_DB_NAME.to_string(),
            sslmode: ENV_DB_SSLMODE.to_string(),
            host: ENV_DB_HOST.to_string(),
            port: ENV_DB_PORT.to_string(),
            container_flag: ENV_IS_DOCKER.to_string(),
            app_env: ENV_APP_ENV.to_string(),
        }
    }
}

/// Read a process environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Untrimmed value of `key`, or None if unset or empty.
pub(crate) fn non_empty<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|s| !s.is_empty())
}
