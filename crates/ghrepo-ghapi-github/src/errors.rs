use ghrepo_ghapi_interface::ApiError;
use http::{header::InvalidHeaderValue, StatusCode};

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Missing access token")]
    MissingToken,

    #[error("Malformed access token")]
    InvalidToken { source: InvalidHeaderValue },

    #[error("Invalid GitHub root URL {}: {}", url, source)]
    InvalidRootUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("GitHub root URL {} cannot hold a path", url)]
    RootUrlCannotBeABase { url: String },

    #[error("Unexpected status {} on {}: {}", status, path, message)]
    StatusError {
        path: String,
        status: StatusCode,
        message: String,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::MissingToken => ApiError::MissingToken,
            GitHubError::StatusError { path, status, .. } if status == StatusCode::UNAUTHORIZED => {
                ApiError::Unauthorized { path }
            }
            GitHubError::StatusError { path, status, .. } if status == StatusCode::NOT_FOUND => {
                ApiError::NotFound { path }
            }
            GitHubError::StatusError {
                path,
                status,
                message,
            } => ApiError::StatusError {
                path,
                status: status.as_u16(),
                message,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
