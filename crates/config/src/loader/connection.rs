//! Connection descriptor resolution.
//!
//! Responsibilities:
//! - Read the six connection parameters from an `EnvSource`.
//! - Pick host/port by run mode and the container flag.
//! - Format the key/value connection string.
//!
//! Does NOT handle:
//! - Overlay file loading (see run_mode.rs / dotenv.rs).
//!
//! Invariants:
//! - Production reads host and port from their variables, never from the local/container branch.
//! - Outside production with the container flag set to `true`, host comes from the host
//!   variable and port is always `5432`.
//! - Outside production without the container flag, host is `localhost` and port comes
//!   from the port variable.
//! - Any missing value fails the whole resolution; there are no defaults for missing values.

use secrecy::SecretString;
use tracing::debug;

use super::env::{EnvKeys, EnvSource, non_empty};
use super::error::ConfigError;
use crate::constants::{CONTAINER_DB_PORT, CONTAINER_FLAG_ENABLED, LOCALHOST};
use crate::types::{ConnectionDescriptor, RunMode};

/// Resolves connection descriptors using a set of variable names.
#[derive(Debug, Clone, Default)]
pub struct ConnectionResolver {
    keys: EnvKeys,
}

impl ConnectionResolver {
    /// Create a resolver reading the default variable names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver reading custom variable names.
    pub fn with_keys(keys: EnvKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &EnvKeys {
        &self.keys
    }

    /// Resolve a connection descriptor for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingConfiguration` listing every variable
    /// whose value is unset or empty.
    pub fn resolve<E>(&self, env: &E, mode: RunMode) -> Result<ConnectionDescriptor, ConfigError>
    where
        E: EnvSource + ?Sized,
    {
        let keys = &self.keys;

        let user = non_empty(env, &keys.user);
        let password = non_empty(env, &keys.password);
        let dbname = non_empty(env, &keys.dbname);
        let sslmode = non_empty(env, &keys.sslmode);

        let (host, port) = match mode {
            RunMode::Production => (non_empty(env, &keys.host), non_empty(env, &keys.port)),
            RunMode::Development => {
                let in_container = non_empty(env, &keys.container_flag).as_deref()
                    == Some(CONTAINER_FLAG_ENABLED);
                if in_container {
                    debug!("Using container database setup");
                    (
                        non_empty(env, &keys.host),
                        Some(CONTAINER_DB_PORT.to_string()),
                    )
                } else {
                    debug!("Using local database setup");
                    (Some(LOCALHOST.to_string()), non_empty(env, &keys.port))
                }
            }
        };

        let mut missing = Vec::new();
        let mut require = |value: Option<String>, key: &str| {
            value.unwrap_or_else(|| {
                missing.push(key.to_string());
                String::new()
            })
        };

        let user = require(user, &keys.user);
        let password = require(password, &keys.password);
        let dbname = require(dbname, &keys.dbname);
        let host = require(host, &keys.host);
        let port = require(port, &keys.port);
        let sslmode = require(sslmode, &keys.sslmode);

        if !missing.is_empty() {
            return Err(ConfigError::MissingConfiguration { missing });
        }

        debug!(%mode, host = %host, port = %port, "Resolved database connection descriptor");

        Ok(ConnectionDescriptor::from_parts(
            user,
            SecretString::new(password.into()),
            dbname,
            host,
            port,
            sslmode,
        ))
    }

    /// Resolve and render the connection string for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Configuration` wrapping the resolution failure.
    pub fn connection_string<E>(&self, env: &E, mode: RunMode) -> Result<String, ConfigError>
    where
        E: EnvSource + ?Sized,
    {
        let descriptor = self
            .resolve(env, mode)
            .map_err(|e| ConfigError::Configuration(Box::new(e)))?;
        Ok(descriptor.to_connection_string())
    }
}

/// Resolve a connection descriptor using the default variable names.
pub fn resolve_connection_descriptor<E>(
    env: &E,
    mode: RunMode,
) -> Result<ConnectionDescriptor, ConfigError>
where
    E: EnvSource + ?Sized,
{
    ConnectionResolver::new().resolve(env, mode)
}

/// Format the connection string using the default variable names.
pub fn format_connection_string<E>(env: &E, mode: RunMode) -> Result<String, ConfigError>
where
    E: EnvSource + ?Sized,
{
    ConnectionResolver::new().connection_string(env, mode)
}
