//! Configuration management for the parameter store repository.
//!
//! This crate provides the repository settings types and a loader that merges
//! them from `.env` files, environment variables, a JSON config file, and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{Config, FileConfig, FileRepositoryConfig, RepositoryConfig};
