//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test connection descriptor resolution and formatting against fixed mappings.
//! - Test run mode initialization, including overlay loading from disk.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::BTreeMap;
use std::sync::Mutex;

pub mod run_mode_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a fixed environment mapping.
pub fn env_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A complete set of connection variables, including host and port.
pub fn full_env() -> BTreeMap<String, String> {
    env_map(&[
        ("TEST_DB_USER", "app"),
        ("TEST_DB_PASSWORD", "s3cret"),
        ("TEST_DB_NAME", "orders"),
        ("TEST_DB_SSLMODE", "require"),
        ("TEST_DB_HOST", "db.prod.internal"),
        ("TEST_DB_PORT", "6543"),
    ])
}
