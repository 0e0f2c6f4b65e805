//! Resolve command implementation.

use anyhow::{Context, Result};
use paramstore_config::Config;
use paramstore_repository::{BackendRegistry, EnvironmentRequest};
use tracing::info;

use crate::cancellation::run_cancellable;
use crate::formatters::{OutputFormat, format_environment};

pub struct ResolveArgs {
    pub application: String,
    pub profile: String,
    pub label: Option<String>,
    pub config_token: Option<String>,
    pub include_origin: bool,
    pub format: OutputFormat,
}

pub async fn run(config: Config, args: ResolveArgs) -> Result<()> {
    let registry = BackendRegistry::with_defaults();
    let repository = registry
        .create(&config)
        .await
        .context("Failed to create repository backend")?;

    let mut request = EnvironmentRequest::new(&args.application, &args.profile)
        .with_include_origin(args.include_origin);
    if let Some(label) = args.label {
        request = request.with_label(label);
    }
    if let Some(token) = args.config_token {
        request = request.with_config_token(token);
    }

    info!(
        application = %args.application,
        profile = %args.profile,
        backend = %config.backend,
        "Resolving environment"
    );

    let environment = run_cancellable(async {
        repository.find_one(&request).await.with_context(|| {
            format!(
                "Failed to resolve environment for '{}' (profile '{}')",
                args.application, args.profile
            )
        })
    })
    .await?;

    print!("{}", format_environment(&environment, args.format)?);
    Ok(())
}
