//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map repository and configuration errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use paramstore_config::ConfigError;
use paramstore_repository::RepositoryError;

/// Structured exit codes for `paramstore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Credentials were malformed or rejected by the store.
    ///
    /// Scripts should refresh the config token or fix the local profile.
    CredentialsError = 2,

    /// The store request failed (network, throttling, service error).
    ///
    /// Scripts may retry with backoff.
    StoreError = 3,

    /// Invalid configuration or unusable store data.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(self, ExitCode::StoreError)
    }
}

impl From<&RepositoryError> for ExitCode {
    fn from(err: &RepositoryError) -> Self {
        match err {
            RepositoryError::CredentialParse { .. } => ExitCode::CredentialsError,
            e @ RepositoryError::StoreFetch { .. } if e.is_auth_error() => {
                ExitCode::CredentialsError
            }
            RepositoryError::StoreFetch { .. } => ExitCode::StoreError,
            RepositoryError::MalformedParameterName { .. }
            | RepositoryError::InvalidResponse(_)
            | RepositoryError::UnknownBackend(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<RepositoryError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}
