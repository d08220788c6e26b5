//! Shared test utilities for pgenv integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a complete set of connection variables.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Host variables that would change routing or log filtering are cleared.

use assert_cmd::Command;

/// Connection variables for a production-style setup.
pub const FULL_ENV: [(&str, &str); 6] = [
    ("TEST_DB_USER", "app"),
    ("TEST_DB_PASSWORD", "s3cret"),
    ("TEST_DB_NAME", "orders"),
    ("TEST_DB_SSLMODE", "require"),
    ("TEST_DB_HOST", "db.internal"),
    ("TEST_DB_PORT", "6543"),
];

/// Returns a hermetic `pgenv` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection, routing, and log filter variables are cleared.
pub fn pgenv_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pgenv");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("NO_COLOR", "1");

    // Clear potential host leakage
    for (key, _) in FULL_ENV {
        cmd.env_remove(key);
    }
    cmd.env_remove("APP_ENV")
        .env_remove("IS_DOCKER")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `pgenv` command with every connection variable set.
#[allow(dead_code)]
pub fn pgenv_cmd_with_full_env() -> Command {
    let mut cmd = pgenv_cmd();
    cmd.envs(FULL_ENV);
    cmd
}
