//! Database connection descriptor.
//!
//! Responsibilities:
//! - Hold the six resolved connection parameters.
//! - Render the key/value connection string, in full or with the password redacted.
//! - Provide a serializable summary that omits the password.
//!
//! Does NOT handle:
//! - Reading values from the environment (see `loader::connection`).
//! - Opening database connections.
//!
//! Invariants:
//! - Every field is non-empty; descriptors are only built by the resolver after validation.
//! - Descriptors are immutable once built.
//! - Rendered field order is fixed: user, password, dbname, host, port, sslmode.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::constants::REDACTED_PASSWORD;

/// Resolved database connection parameters.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptor {
    user: String,
    password: SecretString,
    dbname: String,
    host: String,
    port: String,
    sslmode: String,
}

/// Connection parameters safe for display and machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSummary {
    pub user: String,
    pub dbname: String,
    pub host: String,
    pub port: String,
    pub sslmode: String,
}

impl ConnectionDescriptor {
    /// Assemble a descriptor from already-validated parts.
    pub(crate) fn from_parts(
        user: String,
        password: SecretString,
        dbname: String,
        host: String,
        port: String,
        sslmode: String,
    ) -> Self {
        Self {
            user,
            password,
            dbname,
            host,
            port,
            sslmode,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the plaintext password.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn sslmode(&self) -> &str {
        &self.sslmode
    }

    /// Render the key/value connection string.
    ///
    /// The result contains the plaintext password. Use
    /// [`to_redacted_string`](Self::to_redacted_string) for logs.
    pub fn to_connection_string(&self) -> String {
        self.render(self.password.expose_secret())
    }

    /// Render the connection string with the password replaced by a placeholder.
    pub fn to_redacted_string(&self) -> String {
        self.render(REDACTED_PASSWORD)
    }

    /// Summary of every field except the password.
    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            user: self.user.clone(),
            dbname: self.dbname.clone(),
            host: self.host.clone(),
            port: self.port.clone(),
            sslmode: self.sslmode.clone(),
        }
    }

    fn render(&self, password: &str) -> String {
        format!(
            "user={} password={} dbname={} host={} port={} sslmode={}",
            self.user, password, self.dbname, self.host, self.port, self.sslmode
        )
    }
}
