//! Centralized constants for the paramstore workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string duplication and improve maintainability.

// =============================================================================
// Repository Defaults
// =============================================================================

/// Identifier of the AWS Parameter Store backend in the backend registry.
pub const BACKEND_AWS_PARAMETER_STORE: &str = "awsparameterstore";

/// Backend selected when no backend is configured.
pub const DEFAULT_BACKEND: &str = BACKEND_AWS_PARAMETER_STORE;

/// Default path separator used by the parameter store hierarchy.
pub const PATH_SEPARATOR: &str = "/";

/// Default root segment prepended to every store path.
pub const DEFAULT_PATH_PREFIX: &str = PATH_SEPARATOR;

/// Default separator placed between the application and profile segments.
pub const DEFAULT_PROFILE_SEPARATOR: &str = PATH_SEPARATOR;

/// Default merge precedence (lowest precedence, so any explicit order wins).
pub const DEFAULT_ORDER: i32 = i32::MAX;

/// Profile the CLI requests when none is given.
pub const DEFAULT_APPLICATION_PROFILE: &str = "default";

// =============================================================================
// Store Defaults
// =============================================================================

/// Maximum number of parameters requested per `GetParametersByPath` page.
///
/// Parameter Store caps this value at 10.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

// =============================================================================
// Config File
// =============================================================================

/// Project name used to locate the platform configuration directory.
pub const CONFIG_DIR_NAME: &str = "paramstore";

/// File name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
