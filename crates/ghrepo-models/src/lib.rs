//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod configuration_error;
mod github_config;
mod project_metadata;
mod repository_path;

pub use configuration_error::ConfigurationError;
pub use github_config::{GithubConfig, GithubConfigOverrides};
pub use project_metadata::{IssueTracker, Organization, ProjectMetadata, ScmRepository};
pub use repository_path::{RepositoryPath, RepositoryPathError};
