//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Expose every repository setting as a global override.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `PARAMSTORE_*` settings itself; `ConfigLoader::from_env` does.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use paramstore_config::constants::DEFAULT_APPLICATION_PROFILE;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "paramstore")]
#[command(about = "Resolve application configuration from a hierarchical parameter store", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  paramstore resolve myapp\n  paramstore resolve myapp dev,default --format yaml\n  paramstore --path-prefix /config/ paths myapp dev,prod\n  paramstore --aws-profile ops resolve myapp prod main\n"
)]
pub struct Cli {
    /// Backend identifier (default: awsparameterstore)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Merge precedence among repositories (lower wins)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub order: Option<i32>,

    /// Separator between application and profile path segments
    #[arg(long, global = true)]
    pub profile_separator: Option<String>,

    /// Root path prepended to every store path
    #[arg(long, global = true)]
    pub path_prefix: Option<String>,

    /// Store region override
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named local credential profile used when no config token is supplied
    #[arg(long, global = true)]
    pub aws_profile: Option<String>,

    /// Store endpoint URL override (e.g. a local emulator)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via PARAMSTORE_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "PARAMSTORE_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print the environment for an application
    Resolve {
        /// Application name
        application: String,

        /// Profile, or comma-separated profiles in precedence order
        #[arg(default_value = DEFAULT_APPLICATION_PROFILE)]
        profile: String,

        /// Label passed through to the result
        label: Option<String>,

        /// Base64 JSON session credentials (AccessKeyId, SecretAccessKey, SessionToken)
        #[arg(long, env = "PARAMSTORE_CONFIG_TOKEN", hide_env_values = true)]
        config_token: Option<String>,

        /// Accepted for compatibility; has no effect on this backend
        #[arg(long)]
        include_origin: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the store paths a resolve would read, without contacting the store
    Paths {
        /// Application name
        application: String,

        /// Profile, or comma-separated profiles
        #[arg(default_value = DEFAULT_APPLICATION_PROFILE)]
        profile: String,
    },
}
