//! Centralized constants for the pgenv workspace.
//!
//! This module contains environment variable names, literal fallbacks, and
//! overlay file locations shared by the loader and the CLI.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Database user.
pub const ENV_DB_USER: &str = "TEST_DB_USER";

/// Database password.
pub const ENV_DB_PASSWORD: &str = "TEST_DB_PASSWORD";

/// Database name.
pub const ENV_DB_NAME: &str = "TEST_DB_NAME";

/// TLS mode passed through as `sslmode`.
pub const ENV_DB_SSLMODE: &str = "TEST_DB_SSLMODE";

/// Database host. Used in production and when running inside a container.
pub const ENV_DB_HOST: &str = "TEST_DB_HOST";

/// Database port. Ignored when running inside a container outside production.
pub const ENV_DB_PORT: &str = "TEST_DB_PORT";

/// Set to `true` when the process runs inside a container.
pub const ENV_IS_DOCKER: &str = "IS_DOCKER";

/// Application environment; `production` selects the production run mode.
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Set to `1` or `true` to skip all overlay file loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Literal Fallbacks
// =============================================================================

/// Host used outside production when not running inside a container.
pub const LOCALHOST: &str = "localhost";

/// Port used outside production when running inside a container.
pub const CONTAINER_DB_PORT: &str = "5432";

/// Value of the container flag that enables the container branch.
pub const CONTAINER_FLAG_ENABLED: &str = "true";

// =============================================================================
// Run Mode Labels
// =============================================================================

pub const PRODUCTION_LABEL: &str = "production";

pub const DEVELOPMENT_LABEL: &str = "development";

// =============================================================================
// Overlay Files
// =============================================================================

/// Overlay loaded best-effort from the working directory.
pub const DEFAULT_OVERLAY_PATH: &str = ".env";

/// Overlay that must load in development, relative to the working directory.
pub const DEVELOPMENT_OVERLAY_PATH: &str = "../.env";

/// Placeholder printed instead of the password in redacted output.
pub const REDACTED_PASSWORD: &str = "********";
