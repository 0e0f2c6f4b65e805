//! Config file loading.
//!
//! Responsibilities:
//! - Locate the JSON config file (explicit path or platform config directory).
//! - Apply file values to a ConfigLoader instance without overriding values already set.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Writing the config file.
//!
//! Invariants:
//! - A missing file (or config directory) at the default location is not an error.
//! - A missing file at an explicitly configured location is an error.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::FileConfig;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/paramstore/config.json`
/// - macOS: `~/Library/Application Support/paramstore/config.json`
/// - Windows: `%AppData%\paramstore\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Apply config file values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => match default_config_path() {
            Ok(path) => (path, false),
            Err(e) => {
                tracing::debug!(error = %e, "No default config location");
                return Ok(());
            }
        },
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No config file at default location");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    apply_file_config(loader, file);
    Ok(())
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fill unset loader values from the file.
fn apply_file_config(loader: &mut ConfigLoader, file: FileConfig) {
    let repo = file.repository;

    if loader.backend().is_none() {
        loader.set_backend(file.backend);
    }
    if loader.order().is_none() {
        loader.set_order(repo.order);
    }
    if loader.profile_separator().is_none() {
        loader.set_profile_separator(repo.profile_separator);
    }
    if loader.path_prefix().is_none() {
        loader.set_path_prefix(repo.path_prefix);
    }
    if loader.region().is_none() {
        loader.set_region(repo.region);
    }
    if loader.local_profile_name().is_none() {
        loader.set_local_profile_name(repo.local_profile_name);
    }
    if loader.endpoint_url().is_none() {
        loader.set_endpoint_url(repo.endpoint_url);
    }
}
