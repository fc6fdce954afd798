//! GitHub configuration.

use crate::ConfigurationError;

const GITHUB_URL: &str = "https://github.com";
const GITHUB_SSH_HOST: &str = "git@github.com";

/// GitHub configuration for a project.
///
/// Every field is optional until the configuration is finalized. Values set
/// explicitly are never replaced by derived ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubConfig {
    /// GitHub account or organization.
    pub user: Option<String>,
    /// Repository name.
    pub repository: Option<String>,
    /// URL of the project web site.
    pub website_url: Option<String>,
    /// URL of the issue tracker.
    pub issue_tracker_url: Option<String>,
    /// Read-only repository connection.
    pub connection: Option<String>,
    /// Developer repository connection.
    pub developer_connection: Option<String>,
    /// URL of the account profile.
    pub profile_url: Option<String>,
}

/// Explicit values to apply on a [`GithubConfig`] before it gets finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubConfigOverrides {
    /// GitHub account or organization.
    pub user: Option<String>,
    /// Repository name.
    pub repository: Option<String>,
    /// URL of the project web site.
    pub website_url: Option<String>,
    /// URL of the issue tracker.
    pub issue_tracker_url: Option<String>,
    /// Read-only repository connection.
    pub connection: Option<String>,
    /// Developer repository connection.
    pub developer_connection: Option<String>,
    /// URL of the account profile.
    pub profile_url: Option<String>,
}

impl GithubConfig {
    /// Apply defaults from the project.
    pub fn initialize(&mut self, project_name: &str) {
        if self.repository.is_none() {
            self.repository = Some(project_name.into());
        }
    }

    /// Apply every value present in the overrides.
    pub fn apply_overrides(&mut self, overrides: GithubConfigOverrides) {
        macro_rules! apply {
            ($($field:ident),+) => {
                $(
                    if let Some(value) = overrides.$field {
                        self.$field = Some(value);
                    }
                )+
            };
        }

        apply!(
            user,
            repository,
            website_url,
            issue_tracker_url,
            connection,
            developer_connection,
            profile_url
        );
    }

    /// Derive every unset field from the known ones.
    ///
    /// Rules are applied in order, as later rules may read the web site URL
    /// computed by an earlier one. A rule whose inputs are not known yet is
    /// skipped and leaves its target unset.
    pub fn finalize(&mut self) {
        if self.profile_url.is_none() {
            self.profile_url = self.user.as_deref().map(|user| format!("{GITHUB_URL}/{user}"));
        }

        if self.website_url.is_none() {
            self.website_url = self
                .user_and_repository()
                .map(|(user, repository)| format!("{GITHUB_URL}/{user}/{repository}"));
        }

        if self.connection.is_none() {
            self.connection = self.website_url.as_deref().map(|url| format!("{url}.git"));
        }

        if self.developer_connection.is_none() {
            self.developer_connection = self
                .user_and_repository()
                .map(|(user, repository)| format!("{GITHUB_SSH_HOST}:{user}/{repository}.git"));
        }

        if self.issue_tracker_url.is_none() {
            self.issue_tracker_url = self.website_url.as_deref().map(|url| format!("{url}/issues"));
        }
    }

    /// Check that mandatory fields are set.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.user.is_none() {
            return Err(ConfigurationError::MissingField { field: "user" });
        }

        Ok(())
    }

    fn user_and_repository(&self) -> Option<(&str, &str)> {
        Some((self.user.as_deref()?, self.repository.as_deref()?))
    }
}
