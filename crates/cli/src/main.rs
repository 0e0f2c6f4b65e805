//! paramstore - resolve application configuration from a parameter store.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Build the repository configuration (dotenv, env vars, config file, CLI overrides).
//! - Run the selected command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Path resolution, credentials or fetching (see `crates/repository`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use cancellation::{is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use paramstore_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Precedence: CLI overrides > env vars > config file > defaults.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to the default location
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .from_file()
        .context("Failed to load configuration file")?;

    if let Some(ref backend) = cli.backend {
        loader = loader.with_backend(backend.clone());
    }
    if let Some(order) = cli.order {
        loader = loader.with_order(order);
    }
    if let Some(ref separator) = cli.profile_separator {
        loader = loader.with_profile_separator(separator.clone());
    }
    if let Some(ref prefix) = cli.path_prefix {
        loader = loader.with_path_prefix(prefix.clone());
    }
    if let Some(ref region) = cli.region {
        loader = loader.with_region(region.clone());
    }
    if let Some(ref profile) = cli.aws_profile {
        loader = loader.with_local_profile_name(profile.clone());
    }
    if let Some(ref url) = cli.endpoint_url {
        loader = loader.with_endpoint_url(url.clone());
    }

    let config = loader.build().context("Failed to build configuration")?;
    tracing::debug!(
        backend = %config.backend,
        path_prefix = %config.repository.path_prefix,
        profile_separator = %config.repository.profile_separator,
        region = ?config.repository.region,
        "Loaded configuration"
    );
    Ok(config)
}
