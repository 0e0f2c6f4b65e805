//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `PARAMSTORE_*` variable the loader reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("PARAMSTORE_BACKEND", None),
        ("PARAMSTORE_ORDER", None),
        ("PARAMSTORE_PROFILE_SEPARATOR", None),
        ("PARAMSTORE_PATH_PREFIX", None),
        ("PARAMSTORE_REGION", None),
        ("PARAMSTORE_AWS_PROFILE", None),
        ("PARAMSTORE_ENDPOINT_URL", None),
        ("PARAMSTORE_CONFIG_PATH", None),
    ]
}
