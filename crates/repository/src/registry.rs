//! Backend selection.
//!
//! Maps a backend identifier from configuration to a constructor. The lookup
//! happens once at start-up; requests go straight to the built repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use paramstore_config::constants::BACKEND_AWS_PARAMETER_STORE;
use paramstore_config::{Config, RepositoryConfig};
use tracing::info;

use crate::environment::EnvironmentRepository;
use crate::error::{RepositoryError, Result};
use crate::repository::ParameterStoreRepository;

/// Constructor for one backend.
pub type BackendFactory = Arc<
    dyn Fn(RepositoryConfig) -> BoxFuture<'static, Result<Arc<dyn EnvironmentRepository>>>
        + Send
        + Sync,
>;

/// Registry of known backends keyed by identifier.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    factories: BTreeMap<String, BackendFactory>,
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.backends())
            .finish()
    }
}

impl BackendRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in backend.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BACKEND_AWS_PARAMETER_STORE, |config| {
            async move {
                let repo = ParameterStoreRepository::from_config(config).await;
                Ok(Arc::new(repo) as Arc<dyn EnvironmentRepository>)
            }
            .boxed()
        });
        registry
    }

    /// Register (or replace) a backend constructor.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn(RepositoryConfig) -> BoxFuture<'static, Result<Arc<dyn EnvironmentRepository>>>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(id.into(), Arc::new(factory));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn backends(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build the repository selected by `config.backend`.
    ///
    /// # Errors
    /// Returns [`RepositoryError::UnknownBackend`] when nothing is registered
    /// under the identifier, or whatever the constructor returns.
    pub async fn create(&self, config: &Config) -> Result<Arc<dyn EnvironmentRepository>> {
        let factory = self
            .factories
            .get(&config.backend)
            .ok_or_else(|| RepositoryError::UnknownBackend(config.backend.clone()))?;

        info!(backend = %config.backend, "Creating repository backend");
        factory(config.repository.clone()).await
    }
}
