//! Metrics for parameter store fetches.
//!
//! Fetch and environment latency, page counts and error categories, recorded
//! through the `metrics` facade.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder in the host process)
//!
//! # Invariants
//! - Labels are limited to `credential_source`, `outcome` and `error_category`;
//!   paths are never used as labels because they are unbounded.
//! - Recording is infallible and a no-op when no recorder is installed.

use std::time::Duration;

use crate::error::RepositoryError;

/// Metric name for a full (all pages) fetch duration histogram.
pub const METRIC_FETCH_DURATION: &str = "paramstore_fetch_duration_seconds";

/// Metric name for pages requested from the store.
pub const METRIC_PAGES_TOTAL: &str = "paramstore_pages_total";

/// Metric name for parameters received from the store.
pub const METRIC_PARAMETERS_TOTAL: &str = "paramstore_parameters_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "paramstore_errors_total";

/// Metric name for resolved environments.
pub const METRIC_ENVIRONMENTS_TOTAL: &str = "paramstore_environments_total";

/// Metric name for environment resolution duration histogram.
pub const METRIC_ENVIRONMENT_DURATION: &str = "paramstore_environment_duration_seconds";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller token could not be decoded.
    Credentials,
    /// Store rejected the credentials or denied access.
    Auth,
    /// Store throttled the request.
    Throttling,
    /// Any other store failure.
    Store,
    /// Store response was unusable.
    Response,
    /// Anything else.
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Credentials => "credentials",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Throttling => "throttling",
            ErrorCategory::Store => "store",
            ErrorCategory::Response => "response",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&RepositoryError> for ErrorCategory {
    fn from(error: &RepositoryError) -> Self {
        match error {
            RepositoryError::CredentialParse { .. } => ErrorCategory::Credentials,
            e if e.is_auth_error() => ErrorCategory::Auth,
            e if e.is_throttling() => ErrorCategory::Throttling,
            RepositoryError::StoreFetch { .. } => ErrorCategory::Store,
            RepositoryError::MalformedParameterName { .. }
            | RepositoryError::InvalidResponse(_) => ErrorCategory::Response,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for repository operations.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record how long fetching every page of one path took.
    pub fn record_fetch_duration(
        &self,
        credential_source: &'static str,
        duration: Duration,
        ok: bool,
    ) {
        if !self.enabled {
            return;
        }

        metrics::histogram!(METRIC_FETCH_DURATION,
            "credential_source" => credential_source,
            "outcome" => if ok { "success" } else { "error" },
        )
        .record(duration.as_secs_f64());
    }

    /// Record one page received from the store.
    pub fn record_page(&self, parameters: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_PAGES_TOTAL).increment(1);
        metrics::counter!(METRIC_PARAMETERS_TOTAL).increment(parameters as u64);
    }

    /// Record an error by category.
    pub fn record_error(&self, error: &RepositoryError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }

    /// Record a resolved (or failed) environment and how long it took.
    pub fn record_environment(&self, duration: Duration, ok: bool) {
        if !self.enabled {
            return;
        }

        let outcome = if ok { "success" } else { "error" };
        metrics::counter!(METRIC_ENVIRONMENTS_TOTAL, "outcome" => outcome).increment(1);
        metrics::histogram!(METRIC_ENVIRONMENT_DURATION, "outcome" => outcome)
            .record(duration.as_secs_f64());
    }
}
