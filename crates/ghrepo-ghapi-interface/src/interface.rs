use async_trait::async_trait;

use crate::{
    types::{GhRepository, GhUser},
    Result,
};

/// GitHub API Adapter interface
///
/// Every call authenticates with the given access token.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get the authenticated user.
    async fn user_get(&self, token: &str) -> Result<GhUser>;
    /// Get a repository.
    async fn repositories_get(&self, token: &str, owner: &str, name: &str)
        -> Result<GhRepository>;
    /// Create a repository for the authenticated user.
    async fn repositories_create(&self, token: &str, name: &str) -> Result<GhRepository>;
    /// Update the description of a repository.
    async fn repositories_update_description(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        description: &str,
    ) -> Result<GhRepository>;
}
