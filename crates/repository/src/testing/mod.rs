//! Testing utilities for repository tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use paramstore_repository::testing::{InMemoryParameterStore, load_fixture};
//!
//! let store = InMemoryParameterStore::new()
//!     .with_parameter("/app/default/server/port", "8080")
//!     .with_page_size_cap(1);
//! let page = load_fixture("ssm/page_1.json");
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::auth::CredentialToken;
use crate::error::{RepositoryError, Result};
use crate::store::{PageRequest, Parameter, ParameterPage, ParameterStore};

/// A [`ParameterStore`] over a fixed parameter list.
///
/// Pages are served in insertion order. Continuation tokens are opaque offsets.
/// Every request is recorded for later inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParameterStore {
    parameters: Vec<Parameter>,
    page_size_cap: Option<usize>,
    requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    /// Serve at most `cap` parameters per page regardless of the requested size.
    pub fn with_page_size_cap(mut self, cap: usize) -> Self {
        self.page_size_cap = Some(cap.max(1));
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn matches(request: &PageRequest, name: &str) -> bool {
        match name.strip_prefix(&request.path) {
            Some(rest) => request.recursive || !rest.contains('/'),
            None => false,
        }
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn get_parameters_by_path(&self, request: PageRequest) -> Result<ParameterPage> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let offset = match &request.next_token {
            Some(token) => token.parse::<usize>().map_err(|_| {
                RepositoryError::InvalidResponse(format!("unknown next token '{token}'"))
            })?,
            None => 0,
        };

        let requested = usize::try_from(request.max_results.max(1)).unwrap_or(1);
        let size = self.page_size_cap.map_or(requested, |cap| cap.min(requested));

        let matching: Vec<&Parameter> = self
            .parameters
            .iter()
            .filter(|p| Self::matches(&request, &p.name))
            .collect();

        let end = (offset + size).min(matching.len());
        let parameters = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|p| (*p).clone())
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: (end < matching.len()).then(|| end.to_string()),
        })
    }
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// If the file cannot be read or is not valid JSON.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A valid encoded caller token with fixed test credentials.
pub fn sample_config_token() -> String {
    CredentialToken::new("accessKey", "secretKey", "sessionToken")
        .encode()
        .unwrap_or_default()
}
