//! Parameter store configuration backend.
//!
//! Resolves application configuration from a hierarchical parameter store:
//! builds a store path per application/profile, picks credentials per request
//! (caller token, local profile, or the SDK default chain), fetches every
//! parameter under the path, and flattens the names into dot-separated
//! property keys. Results are returned as an [`Environment`] with one
//! [`PropertySource`] per requested profile.

pub mod auth;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod path;
pub mod property_source;
pub mod registry;
pub mod repository;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{CredentialSource, CredentialToken, CredentialsResolver};
pub use environment::{Environment, EnvironmentRepository, EnvironmentRequest};
pub use error::{RepositoryError, Result};
pub use fetch::ParameterFetcher;
pub use metrics::{ErrorCategory, MetricsCollector};
pub use path::resolve_path;
pub use property_source::{NAME_PREFIX, PropertySource, build_property_source};
pub use registry::BackendRegistry;
pub use repository::{ParameterStoreRepository, profile_paths, split_profiles};
pub use store::{PageRequest, Parameter, ParameterPage, ParameterStore, SsmParameterStore};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockParameterStore;
