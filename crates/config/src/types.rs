//! Configuration types for the parameter store repository.
//!
//! Responsibilities:
//! - Define `RepositoryConfig`, the immutable per-repository settings.
//! - Define `Config`, the top-level configuration (backend selection plus settings).
//! - Define `FileConfig`, the partial on-disk representation.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader` module).
//! - Building store paths from these settings (see the repository crate).
//!
//! Invariants:
//! - `RepositoryConfig::path_prefix` and `profile_separator` are never empty once built;
//!   empty values are replaced with their defaults by the loader.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKEND, DEFAULT_ORDER, DEFAULT_PATH_PREFIX, DEFAULT_PROFILE_SEPARATOR,
};

/// Settings for one parameter store repository instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Merge precedence among multiple repositories (lower wins).
    pub order: i32,
    /// Separator placed between the application and profile path segments.
    pub profile_separator: String,
    /// Root segment prepended to every store path.
    pub path_prefix: String,
    /// Store endpoint region override.
    pub region: Option<String>,
    /// Named local credential profile used when no caller token is supplied.
    pub local_profile_name: Option<String>,
    /// Store endpoint URL override (LocalStack, test doubles).
    pub endpoint_url: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            profile_separator: DEFAULT_PROFILE_SEPARATOR.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            region: None,
            local_profile_name: None,
            endpoint_url: None,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the backend to construct at start-up.
    pub backend: String,
    /// Settings handed to the backend constructor.
    pub repository: RepositoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            repository: RepositoryConfig::default(),
        }
    }
}

/// Partial configuration as stored in the JSON config file.
///
/// Every field is optional so a file may set only what it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: Option<String>,
    pub repository: FileRepositoryConfig,
}

/// Partial repository settings as stored in the JSON config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRepositoryConfig {
    pub order: Option<i32>,
    pub profile_separator: Option<String>,
    pub path_prefix: Option<String>,
    pub region: Option<String>,
    #[serde(alias = "profile", alias = "aws_profile")]
    pub local_profile_name: Option<String>,
    pub endpoint_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_config_defaults() {
        let config = RepositoryConfig::default();
        assert_eq!(config.order, i32::MAX);
        assert_eq!(config.profile_separator, "/");
        assert_eq!(config.path_prefix, "/");
        assert!(config.region.is_none());
        assert!(config.local_profile_name.is_none());
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_file_config_partial_json() {
        let json = r#"{"repository": {"path_prefix": "/config/", "profile": "ops"}}"#;
        let file: FileConfig = serde_json::from_str(json).unwrap();

        assert!(file.backend.is_none());
        assert_eq!(file.repository.path_prefix.as_deref(), Some("/config/"));
        assert_eq!(file.repository.local_profile_name.as_deref(), Some("ops"));
        assert!(file.repository.order.is_none());
    }

    #[test]
    fn test_file_config_empty_object() {
        let file: FileConfig = serde_json::from_str("{}").unwrap();
        assert!(file.backend.is_none());
        assert!(file.repository.region.is_none());
    }
}
