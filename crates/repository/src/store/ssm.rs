//! AWS Systems Manager Parameter Store implementation of [`ParameterStore`].
//!
//! # What this module handles:
//! - Building the shared SDK client from repository settings (region and
//!   endpoint overrides, retries disabled).
//! - Applying per-request credentials through an operation config override,
//!   leaving the shared client untouched.
//! - Mapping SDK errors to [`RepositoryError::StoreFetch`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::retry::RetryConfig;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameters_by_path::GetParametersByPathOutput;
use paramstore_config::RepositoryConfig;

use super::{PageRequest, Parameter, ParameterPage, ParameterStore};
use crate::auth::CredentialSource;
use crate::error::{RepositoryError, Result};

/// Parameter store backed by the AWS SDK client.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// Wrap an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from repository settings.
    ///
    /// Credentials default to the SDK chain; per-request credentials are
    /// applied in [`ParameterStore::get_parameters_by_path`].
    pub async fn from_config(config: &RepositoryConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(
            region = ?sdk_config.region(),
            endpoint_url = ?config.endpoint_url,
            "Built parameter store client"
        );
        Self::new(Client::new(&sdk_config))
    }

    /// The underlying SDK client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters_by_path(&self, request: PageRequest) -> Result<ParameterPage> {
        let operation = self
            .client
            .get_parameters_by_path()
            .path(&request.path)
            .recursive(request.recursive)
            .with_decryption(request.with_decryption)
            .max_results(request.max_results)
            .set_next_token(request.next_token.clone());

        let output = match &request.credentials {
            CredentialSource::CallerToken(token) => {
                operation
                    .customize()
                    .config_override(
                        aws_sdk_ssm::config::Builder::default()
                            .credentials_provider(token.to_sdk_credentials()),
                    )
                    .send()
                    .await
            }
            CredentialSource::LocalProfile(name) => {
                operation
                    .customize()
                    .config_override(
                        aws_sdk_ssm::config::Builder::default().credentials_provider(
                            ProfileFileCredentialsProvider::builder()
                                .profile_name(name)
                                .build(),
                        ),
                    )
                    .send()
                    .await
            }
            CredentialSource::DefaultChain => operation.send().await,
        }
        .map_err(|err| store_error(&request.path, err))?;

        into_page(output)
    }
}

fn store_error<E, R>(path: &str, err: SdkError<E, R>) -> RepositoryError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err
        .as_service_error()
        .and_then(|e| e.code())
        .map(str::to_string);

    // Debug carries the service message that Display omits.
    tracing::debug!(path, code = ?code, error = ?err, "Parameter store request failed");

    RepositoryError::StoreFetch {
        path: path.to_string(),
        code,
        message: DisplayErrorContext(&err).to_string(),
    }
}

fn into_page(output: GetParametersByPathOutput) -> Result<ParameterPage> {
    let parameters = output
        .parameters()
        .iter()
        .map(|p| {
            let name = p.name().ok_or_else(|| {
                RepositoryError::InvalidResponse("parameter without a name".to_string())
            })?;
            let value = p.value().ok_or_else(|| {
                RepositoryError::InvalidResponse(format!("parameter '{name}' without a value"))
            })?;
            Ok(Parameter::new(name, value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ParameterPage {
        parameters,
        next_token: output.next_token().map(str::to_string),
    })
}
