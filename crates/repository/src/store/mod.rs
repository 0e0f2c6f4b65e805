//! Parameter store access.
//!
//! # What this module handles:
//! - The [`ParameterStore`] seam: one page of a by-path listing per call.
//! - Request/response types shared by every store implementation.
//!
//! # What this module does NOT handle:
//! - Pagination (see [`crate::fetch`]).
//! - Credential selection (see [`crate::auth`]).
//!
//! # Invariants
//! - Implementations must be safe for concurrent use; the repository shares one
//!   store handle across all requests.
//! - Implementations do not retry.

mod ssm;

use async_trait::async_trait;

use crate::auth::CredentialSource;
use crate::error::Result;

pub use ssm::SsmParameterStore;

/// A parameter as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Fully qualified hierarchical name, e.g. `/app/default/db/url`.
    pub name: String,
    /// Value; secure values arrive decrypted.
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Request for one page of parameters under a path.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub path: String,
    pub credentials: CredentialSource,
    pub recursive: bool,
    pub with_decryption: bool,
    pub max_results: i32,
    pub next_token: Option<String>,
}

/// One page of parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    /// Continuation token; `None` when there are no more results.
    pub next_token: Option<String>,
}

/// Hierarchical key-value store queried by path.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch a single page of parameters at or below `request.path`.
    async fn get_parameters_by_path(&self, request: PageRequest) -> Result<ParameterPage>;
}
