//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PARAMSTORE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub(crate) const ENV_BACKEND: &str = "PARAMSTORE_BACKEND";
pub(crate) const ENV_ORDER: &str = "PARAMSTORE_ORDER";
pub(crate) const ENV_PROFILE_SEPARATOR: &str = "PARAMSTORE_PROFILE_SEPARATOR";
pub(crate) const ENV_PATH_PREFIX: &str = "PARAMSTORE_PATH_PREFIX";
pub(crate) const ENV_REGION: &str = "PARAMSTORE_REGION";
pub(crate) const ENV_AWS_PROFILE: &str = "PARAMSTORE_AWS_PROFILE";
pub(crate) const ENV_ENDPOINT_URL: &str = "PARAMSTORE_ENDPOINT_URL";
pub(crate) const ENV_CONFIG_PATH: &str = "PARAMSTORE_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(backend) = env_var_or_none(ENV_BACKEND) {
        loader.set_backend(Some(backend));
    }
    if let Some(order) = env_var_or_none(ENV_ORDER) {
        loader.set_order(Some(order.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_ORDER.to_string(),
                message: "must be a 32-bit integer".to_string(),
            }
        })?));
    }
    if let Some(separator) = env_var_or_none(ENV_PROFILE_SEPARATOR) {
        loader.set_profile_separator(Some(separator));
    }
    if let Some(prefix) = env_var_or_none(ENV_PATH_PREFIX) {
        loader.set_path_prefix(Some(prefix));
    }
    if let Some(region) = env_var_or_none(ENV_REGION) {
        loader.set_region(Some(region));
    }
    if let Some(profile) = env_var_or_none(ENV_AWS_PROFILE) {
        loader.set_local_profile_name(Some(profile));
    }
    if let Some(url) = env_var_or_none(ENV_ENDPOINT_URL) {
        loader.set_endpoint_url(Some(url));
    }

    // Config path from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }

    Ok(())
}
