use async_trait::async_trait;
use ghrepo_ghapi_interface::ApiError;
use ghrepo_models::{ConfigurationError, RepositoryPath};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, DomainError, Result};

/// Desired state of a GitHub repository.
#[derive(Clone, PartialEq, Eq)]
pub struct RepositorySettings {
    pub repository_name: String,
    pub repository_description: Option<String>,
    pub access_token: String,
}

impl std::fmt::Debug for RepositorySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositorySettings")
            .field("repository_name", &self.repository_name)
            .field("repository_description", &self.repository_description)
            .finish_non_exhaustive()
    }
}

/// Changes applied on the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub repository: RepositoryPath,
    pub created: bool,
    pub description_updated: bool,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ConfigureGithubRepositoryInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        settings: &RepositorySettings,
    ) -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = ConfigureGithubRepositoryInterface)]
pub(crate) struct ConfigureGithubRepository;

#[async_trait]
impl ConfigureGithubRepositoryInterface for ConfigureGithubRepository {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        settings: &RepositorySettings,
    ) -> Result<ReconcileOutcome> {
        if settings.repository_name.is_empty() {
            return Err(ConfigurationError::MissingField {
                field: "repository",
            }
            .into());
        }

        if !RepositoryPath::is_valid_name(&settings.repository_name) {
            return Err(ConfigurationError::InvalidField {
                field: "repository",
                value: settings.repository_name.clone(),
            }
            .into());
        }

        if settings.access_token.is_empty() {
            return Err(DomainError::Authentication {
                source: ApiError::MissingToken,
            });
        }

        let token = &settings.access_token;
        let login = ctx
            .api_service
            .user_get(token)
            .await
            .map_err(map_user_error)?
            .login;

        let lookup_path = RepositoryPath::new_from_components(&login, &settings.repository_name);
        let (repository, created) = match ctx
            .api_service
            .repositories_get(token, lookup_path.owner(), lookup_path.name())
            .await
        {
            Ok(repository) => (repository, false),
            Err(e) if e.is_not_found() => {
                info!(repository_path = %lookup_path, "Creating repository");

                let repository = ctx
                    .api_service
                    .repositories_create(token, &settings.repository_name)
                    .await
                    .map_err(|e| DomainError::RepositoryCreation {
                        repository_name: settings.repository_name.clone(),
                        source: e,
                    })?;

                (repository, true)
            }
            Err(e) => {
                return Err(DomainError::RepositoryLookup {
                    repository_path: lookup_path,
                    source: e,
                })
            }
        };

        let repository_path =
            RepositoryPath::new_from_components(&repository.owner.login, &repository.name);

        let description_updated = match settings
            .repository_description
            .as_deref()
            .filter(|d| !d.is_empty())
        {
            Some(description) if repository.description.as_deref() != Some(description) => {
                info!(repository_path = %repository_path, "Updating repository description");

                ctx.api_service
                    .repositories_update_description(
                        token,
                        repository_path.owner(),
                        repository_path.name(),
                        description,
                    )
                    .await
                    .map_err(|e| DomainError::RepositoryUpdate {
                        repository_path: repository_path.clone(),
                        source: e,
                    })?;

                true
            }
            _ => false,
        };

        Ok(ReconcileOutcome {
            repository: repository_path,
            created,
            description_updated,
        })
    }
}

fn map_user_error(e: ApiError) -> DomainError {
    match e {
        ApiError::MissingToken
        | ApiError::Unauthorized { .. }
        | ApiError::StatusError {
            status: 401 | 403, ..
        } => DomainError::Authentication { source: e },
        e => DomainError::UserLookup { source: e },
    }
}
