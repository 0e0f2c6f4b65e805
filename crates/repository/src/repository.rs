//! Parameter store backed [`EnvironmentRepository`].
//!
//! Responsibilities:
//! - Split the requested profile list and resolve each profile in order:
//!   path, credentials, fetch, property source.
//!
//! Does NOT handle:
//! - Caching. Every call re-resolves credentials and re-fetches.
//! - Timeouts; callers wrap `find_one` if they need one.
//!
//! Invariants:
//! - One property source per requested profile, in request order, including
//!   empty profile segments.
//! - No state is retained between calls.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use paramstore_config::RepositoryConfig;
use tracing::{debug, info, warn};

use crate::auth::CredentialsResolver;
use crate::environment::{Environment, EnvironmentRepository, EnvironmentRequest};
use crate::error::Result;
use crate::fetch::ParameterFetcher;
use crate::metrics::MetricsCollector;
use crate::path::resolve_path;
use crate::property_source::{PropertySource, build_property_source};
use crate::store::{ParameterStore, SsmParameterStore};

/// Separator between profiles in a request's profile argument.
pub const PROFILE_LIST_SEPARATOR: char = ',';

/// Resolves environments from a hierarchical parameter store.
#[derive(Debug, Clone)]
pub struct ParameterStoreRepository {
    config: RepositoryConfig,
    credentials: CredentialsResolver,
    fetcher: ParameterFetcher,
    metrics: MetricsCollector,
}

impl ParameterStoreRepository {
    /// Create a repository over an existing store.
    pub fn new(config: RepositoryConfig, store: Arc<dyn ParameterStore>) -> Self {
        let credentials = CredentialsResolver::new(config.local_profile_name.clone());
        Self {
            config,
            credentials,
            fetcher: ParameterFetcher::new(store),
            metrics: MetricsCollector::new(),
        }
    }

    /// Create a repository backed by the AWS SDK client built from `config`.
    pub async fn from_config(config: RepositoryConfig) -> Self {
        let store = SsmParameterStore::from_config(&config).await;
        Self::new(config, Arc::new(store))
    }

    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.fetcher = self.fetcher.with_metrics(metrics.clone());
        self.metrics = metrics;
        self
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.fetcher = self.fetcher.with_page_size(page_size);
        self
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    async fn resolve(&self, request: &EnvironmentRequest) -> Result<Environment> {
        let profiles = split_profiles(&request.profile);
        let mut environment =
            Environment::new(&request.application, profiles.clone(), request.label.clone());

        for profile in &profiles {
            let source = self.resolve_profile(request, profile).await?;
            environment.add(source);
        }

        Ok(environment)
    }

    async fn resolve_profile(
        &self,
        request: &EnvironmentRequest,
        profile: &str,
    ) -> Result<PropertySource> {
        let path = resolve_path(&self.config, &request.application, profile);
        let credentials = self.credentials.resolve(request.config_token.as_ref())?;
        debug!(
            application = %request.application,
            profile,
            path = %path,
            credential_source = credentials.kind(),
            "Resolving profile"
        );

        let parameters = self.fetcher.fetch_all(&path, &credentials).await?;
        build_property_source(&path, parameters)
    }
}

#[async_trait]
impl EnvironmentRepository for ParameterStoreRepository {
    async fn find_one(&self, request: &EnvironmentRequest) -> Result<Environment> {
        if request.include_origin {
            warn!("include_origin is not supported by the parameter store backend; ignoring");
        }

        let start = Instant::now();
        let result = self.resolve(request).await;
        self.metrics.record_environment(start.elapsed(), result.is_ok());

        match &result {
            Ok(env) => info!(
                application = %env.name,
                profiles = ?env.profiles,
                sources = env.property_sources.len(),
                properties = env.property_sources.iter().map(PropertySource::len).sum::<usize>(),
                "Resolved environment"
            ),
            Err(e) => {
                self.metrics.record_error(e);
                warn!(
                    application = %request.application,
                    profile = %request.profile,
                    error = %e,
                    "Failed to resolve environment"
                );
            }
        }
        result
    }

    fn order(&self) -> i32 {
        self.config.order
    }
}

/// Split a profile argument on commas, keeping order, duplicates and empty segments.
pub fn split_profiles(profile: &str) -> Vec<String> {
    profile
        .split(PROFILE_LIST_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Store paths a request for `application` and `profile` reads, in profile order.
pub fn profile_paths(config: &RepositoryConfig, application: &str, profile: &str) -> Vec<String> {
    split_profiles(profile)
        .iter()
        .map(|p| resolve_path(config, application, p))
        .collect()
}
