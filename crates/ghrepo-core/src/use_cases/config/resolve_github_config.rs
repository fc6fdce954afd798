use ghrepo_models::{GithubConfig, GithubConfigOverrides};
use shaku::{Component, Interface};
use tracing::debug;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ResolveGithubConfigInterface: Interface {
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project_name: &str,
        overrides: GithubConfigOverrides,
    ) -> Result<GithubConfig>;
}

#[derive(Component)]
#[shaku(interface = ResolveGithubConfigInterface)]
pub(crate) struct ResolveGithubConfig;

impl ResolveGithubConfigInterface for ResolveGithubConfig {
    #[tracing::instrument(skip(self, ctx), ret)]
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project_name: &str,
        overrides: GithubConfigOverrides,
    ) -> Result<GithubConfig> {
        let mut config = GithubConfig::default();
        config.initialize(project_name);

        if let Some(user) = &ctx.config.github_user {
            debug!(user = %user, "Using GitHub user from environment");
            config.user = Some(user.clone());
        }

        config.apply_overrides(overrides);
        config.finalize();
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use ghrepo_models::ConfigurationError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    #[test]
    fn resolve_from_project_name() {
        let ctx = CoreContextTest::new();

        let config = ResolveGithubConfig
            .run(
                &ctx.as_context(),
                "proj",
                GithubConfigOverrides {
                    user: Some("alice".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            config,
            GithubConfig {
                user: Some("alice".into()),
                repository: Some("proj".into()),
                profile_url: Some("https://github.com/alice".into()),
                website_url: Some("https://github.com/alice/proj".into()),
                connection: Some("https://github.com/alice/proj.git".into()),
                developer_connection: Some("git@github.com:alice/proj.git".into()),
                issue_tracker_url: Some("https://github.com/alice/proj/issues".into()),
            }
        );
    }

    #[test]
    fn resolve_with_overrides() {
        let ctx = CoreContextTest::new();

        let config = ResolveGithubConfig
            .run(
                &ctx.as_context(),
                "proj",
                GithubConfigOverrides {
                    user: Some("alice".into()),
                    repository: Some("renamed".into()),
                    website_url: Some("https://example.com".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(config.repository.as_deref(), Some("renamed"));
        assert_eq!(config.website_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.connection.as_deref(), Some("https://example.com.git"));
        assert_eq!(
            config.developer_connection.as_deref(),
            Some("git@github.com:alice/renamed.git")
        );
    }

    #[test]
    fn resolve_user_from_environment() {
        let mut ctx = CoreContextTest::new();
        ctx.config.github_user = Some("bob".into());

        let config = ResolveGithubConfig
            .run(&ctx.as_context(), "proj", GithubConfigOverrides::default())
            .unwrap();
        assert_eq!(config.user.as_deref(), Some("bob"));
        assert_eq!(config.profile_url.as_deref(), Some("https://github.com/bob"));

        let config = ResolveGithubConfig
            .run(
                &ctx.as_context(),
                "proj",
                GithubConfigOverrides {
                    user: Some("alice".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(config.user.as_deref(), Some("alice"));
    }

    #[test]
    fn resolve_without_user() {
        let ctx = CoreContextTest::new();

        let result =
            ResolveGithubConfig.run(&ctx.as_context(), "proj", GithubConfigOverrides::default());

        assert!(matches!(
            result,
            Err(DomainError::Configuration {
                source: ConfigurationError::MissingField { field: "user" }
            })
        ));
    }
}
