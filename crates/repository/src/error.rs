//! Error types for the parameter store repository.

use thiserror::Error;

/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Error codes the store uses for credential and permission failures.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "ExpiredTokenException",
];

/// Errors that can occur while resolving an environment.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A caller-supplied credential token was present but malformed.
    #[error("Unable to parse client temporary credentials: {message}")]
    CredentialParse { message: String },

    /// The store call failed. Not retried.
    #[error("Parameter store request for path '{path}' failed{}: {message}", .code.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
    StoreFetch {
        path: String,
        code: Option<String>,
        message: String,
    },

    /// A fetched parameter does not live under the requested path.
    #[error("Parameter '{name}' is not under requested path '{path}'")]
    MalformedParameterName { path: String, name: String },

    /// The store returned a page missing required fields.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// No constructor is registered for the configured backend.
    #[error("Unknown repository backend: {0}")]
    UnknownBackend(String),
}

impl RepositoryError {
    /// Check if this error was caused by the caller-supplied credential token.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::CredentialParse { .. })
    }

    /// Check if this error indicates the store rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::StoreFetch {
                code: Some(code), ..
            } => AUTH_ERROR_CODES.contains(&code.as_str()),
            _ => false,
        }
    }

    /// Check if this error indicates the store throttled the request.
    pub fn is_throttling(&self) -> bool {
        matches!(
            self,
            Self::StoreFetch { code: Some(code), .. }
                if code == "ThrottlingException" || code == "TooManyUpdates"
        )
    }
}
