//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use paramstore_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::resolve::ResolveArgs;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            application,
            profile,
            label,
            config_token,
            include_origin,
            format,
        } => {
            commands::resolve::run(
                config,
                ResolveArgs {
                    application,
                    profile,
                    label,
                    config_token,
                    include_origin,
                    format,
                },
            )
            .await?;
        }
        Commands::Paths {
            application,
            profile,
        } => {
            commands::paths::run(&config, &application, &profile);
        }
    }
    Ok(())
}
