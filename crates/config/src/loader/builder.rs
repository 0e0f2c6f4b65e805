//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, a JSON config file, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file reading (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Expected call order is `with_config_path` → `from_env` → `from_file` → `with_*` overrides.
//! - `from_file` only fills values that are still unset, so env vars win over the file.
//! - Empty path prefix / profile separator values fall back to their defaults.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_BACKEND, DEFAULT_ORDER, DEFAULT_PATH_PREFIX, DEFAULT_PROFILE_SEPARATOR,
};
use crate::types::{Config, RepositoryConfig};

/// Configuration loader that builds config from environment variables and files.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    backend: Option<String>,
    order: Option<i32>,
    profile_separator: Option<String>,
    path_prefix: Option<String>,
    region: Option<String>,
    local_profile_name: Option<String>,
    endpoint_url: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the JSON config file.
    ///
    /// Values already set (from env vars or builder methods) are kept.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the backend identifier.
    pub fn with_backend(mut self, backend: String) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the merge precedence.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the separator between application and profile segments.
    pub fn with_profile_separator(mut self, separator: String) -> Self {
        self.profile_separator = Some(separator);
        self
    }

    /// Set the root path prefix.
    pub fn with_path_prefix(mut self, prefix: String) -> Self {
        self.path_prefix = Some(prefix);
        self
    }

    /// Set the store region override.
    pub fn with_region(mut self, region: String) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the named local credential profile.
    pub fn with_local_profile_name(mut self, name: String) -> Self {
        self.local_profile_name = Some(name);
        self
    }

    /// Set the store endpoint URL override.
    pub fn with_endpoint_url(mut self, url: String) -> Self {
        self.endpoint_url = Some(url);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let backend = self
            .backend
            .unwrap_or_else(|| DEFAULT_BACKEND.to_string())
            .trim()
            .to_string();
        if backend.is_empty() {
            return Err(ConfigError::MissingBackend);
        }

        let endpoint_url = non_blank(self.endpoint_url)
            .map(|url| validate_endpoint_url(&url).map(|_| url))
            .transpose()?;

        let repository = RepositoryConfig {
            order: self.order.unwrap_or(DEFAULT_ORDER),
            profile_separator: non_empty(self.profile_separator)
                .unwrap_or_else(|| DEFAULT_PROFILE_SEPARATOR.to_string()),
            path_prefix: non_empty(self.path_prefix)
                .unwrap_or_else(|| DEFAULT_PATH_PREFIX.to_string()),
            region: non_blank(self.region),
            local_profile_name: non_blank(self.local_profile_name),
            endpoint_url,
        };

        Ok(Config {
            backend,
            repository,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn backend(&self) -> Option<&String> {
        self.backend.as_ref()
    }

    pub(crate) fn set_backend(&mut self, backend: Option<String>) {
        self.backend = backend;
    }

    pub(crate) fn order(&self) -> Option<i32> {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: Option<i32>) {
        self.order = order;
    }

    pub(crate) fn profile_separator(&self) -> Option<&String> {
        self.profile_separator.as_ref()
    }

    pub(crate) fn set_profile_separator(&mut self, separator: Option<String>) {
        self.profile_separator = separator;
    }

    pub(crate) fn path_prefix(&self) -> Option<&String> {
        self.path_prefix.as_ref()
    }

    pub(crate) fn set_path_prefix(&mut self, prefix: Option<String>) {
        self.path_prefix = prefix;
    }

    pub(crate) fn region(&self) -> Option<&String> {
        self.region.as_ref()
    }

    pub(crate) fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    pub(crate) fn local_profile_name(&self) -> Option<&String> {
        self.local_profile_name.as_ref()
    }

    pub(crate) fn set_local_profile_name(&mut self, name: Option<String>) {
        self.local_profile_name = name;
    }

    pub(crate) fn endpoint_url(&self) -> Option<&String> {
        self.endpoint_url.as_ref()
    }

    pub(crate) fn set_endpoint_url(&mut self, url: Option<String>) {
        self.endpoint_url = url;
    }
}

/// Separators and prefixes are used verbatim, so only the empty string counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_endpoint_url(url: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(url).map_err(|e| ConfigError::InvalidEndpointUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpointUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
