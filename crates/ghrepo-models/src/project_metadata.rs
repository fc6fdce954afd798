//! Project metadata, as published alongside build artifacts.

use crate::GithubConfig;

const GITHUB_ID: &str = "github";
const GIT_KIND: &str = "git";

/// Organization publishing the project.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub website_url: Option<String>,
}

/// Source repository of the project.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmRepository {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub website_url: Option<String>,
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
}

/// Issue tracker of the project.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTracker {
    pub id: Option<String>,
    pub website_url: Option<String>,
}

/// Project metadata.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub organization: Organization,
    pub repository: ScmRepository,
    pub issue_tracker: IssueTracker,
}

impl ProjectMetadata {
    /// Creates metadata for a project.
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(Into::into),
            ..Default::default()
        }
    }

    /// Fill the metadata from a finalized GitHub configuration.
    ///
    /// Project and organization web sites are only set when missing, while
    /// repository and issue tracker entries always point to GitHub.
    pub fn apply_github_config(&mut self, config: &GithubConfig) {
        if self.website_url.is_none() {
            self.website_url.clone_from(&config.website_url);
        }

        if self.organization.website_url.is_none() {
            self.organization.website_url.clone_from(&config.profile_url);
        }

        self.repository = ScmRepository {
            id: Some(GITHUB_ID.into()),
            kind: Some(GIT_KIND.into()),
            website_url: config.website_url.clone(),
            connection: config.connection.clone(),
            developer_connection: config.developer_connection.clone(),
        };

        self.issue_tracker = IssueTracker {
            id: Some(GITHUB_ID.into()),
            website_url: config.issue_tracker_url.clone(),
        };
    }
}
