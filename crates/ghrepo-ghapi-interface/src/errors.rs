//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token was supplied.
    #[error("Missing access token")]
    MissingToken,

    /// The token was rejected.
    #[error("Unauthorized access to {path}")]
    Unauthorized { path: String },

    /// The resource does not exist.
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// Any other unsuccessful response.
    #[error("Unexpected status {status} on {path}: {message}")]
    StatusError {
        path: String,
        status: u16,
        message: String,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Whether the error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
