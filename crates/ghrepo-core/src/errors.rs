//! Logic errors.

use ghrepo_ghapi_interface::ApiError;
use ghrepo_models::{ConfigurationError, RepositoryPath};
use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`ghrepo_models::ConfigurationError`].
    #[error("Invalid configuration: {source}")]
    Configuration { source: ConfigurationError },

    #[error("Could not authenticate on GitHub: {source}")]
    Authentication { source: ApiError },

    #[error("Could not resolve the authenticated GitHub user: {source}")]
    UserLookup { source: ApiError },

    #[error("Could not look up repository {repository_path}: {source}")]
    RepositoryLookup {
        repository_path: RepositoryPath,
        source: ApiError,
    },

    #[error("Could not create repository {repository_name}: {source}")]
    RepositoryCreation {
        repository_name: String,
        source: ApiError,
    },

    #[error("Could not update description of repository {repository_path}: {source}")]
    RepositoryUpdate {
        repository_path: RepositoryPath,
        source: ApiError,
    },
}

impl From<ConfigurationError> for DomainError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
