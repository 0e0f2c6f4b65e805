//! Environment model and the backend repository interface.
//!
//! Responsibilities:
//! - The [`Environment`] returned to the configuration server, serialized in its
//!   wire shape (`name`, `profiles`, `label`, `version`, `state`, `propertySources`).
//! - The per-call [`EnvironmentRequest`].
//! - The [`EnvironmentRepository`] trait every backend implements.
//!
//! Invariants:
//! - `property_sources` follow the order of `profiles`.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::property_source::PropertySource;

/// Resolved configuration for one application and profile list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Application name.
    pub name: String,
    /// Active profiles in request order.
    pub profiles: Vec<String>,
    pub label: Option<String>,
    pub version: Option<String>,
    pub state: Option<String>,
    pub property_sources: Vec<PropertySource>,
}

impl Environment {
    pub fn new(name: impl Into<String>, profiles: Vec<String>, label: Option<String>) -> Self {
        Self {
            name: name.into(),
            profiles,
            label,
            ..Self::default()
        }
    }

    pub fn add(&mut self, source: PropertySource) {
        self.property_sources.push(source);
    }

    /// First value for `key`, searching sources in order.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.property_sources.iter().find_map(|s| s.get(key))
    }
}

/// One resolution request from the configuration server.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentRequest {
    pub application: String,
    /// One profile or a comma-separated list.
    pub profile: String,
    /// Opaque; passed through to the result.
    pub label: Option<String>,
    /// Accepted for interface parity with other backends; has no effect here.
    pub include_origin: bool,
    /// Base64 JSON session credentials supplied by the caller.
    pub config_token: Option<SecretString>,
}

impl EnvironmentRequest {
    pub fn new(application: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            profile: profile.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_include_origin(mut self, include_origin: bool) -> Self {
        self.include_origin = include_origin;
        self
    }

    pub fn with_config_token(mut self, token: impl Into<String>) -> Self {
        self.config_token = Some(SecretString::new(token.into().into()));
        self
    }
}

/// A configuration backend.
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Resolve the environment for a request.
    async fn find_one(&self, request: &EnvironmentRequest) -> Result<Environment>;

    /// Merge precedence among repositories; lower wins.
    fn order(&self) -> i32;
}
