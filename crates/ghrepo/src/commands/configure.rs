use async_trait::async_trait;
use clap::Parser;
use ghrepo_core::use_cases::repositories::configure_github_repository::{
    ConfigureGithubRepositoryInterface, RepositorySettings,
};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    config_validator::validate_api_credentials,
    Result,
};

/// Create the GitHub repository of a project if needed, and sync its description
#[derive(Parser)]
pub(crate) struct ConfigureCommand {
    /// Project name
    #[arg(long)]
    project_name: String,
    /// Project description
    #[arg(long)]
    description: Option<String>,
    /// Repository name (defaults to the project name)
    #[arg(long)]
    repository: Option<String>,
}

#[async_trait]
impl Command for ConfigureCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        validate_api_credentials(&ctx.config)?;

        let settings = RepositorySettings {
            repository_name: self.repository.unwrap_or(self.project_name),
            repository_description: self.description,
            access_token: ctx.config.api.github.token.clone(),
        };

        let uc: &dyn ConfigureGithubRepositoryInterface = ctx.core_module.resolve_ref();
        let outcome = uc.run(&ctx.as_core_context(), &settings).await?;

        if outcome.created {
            writeln!(
                ctx.writer.write().await,
                "Repository {} created.",
                outcome.repository
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "Repository {} already exists.",
                outcome.repository
            )?;
        }

        if outcome.description_updated {
            writeln!(
                ctx.writer.write().await,
                "Description of repository {} updated.",
                outcome.repository
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ghrepo_config::ApiDriver;
    use ghrepo_ghapi_interface::{
        types::{GhRepository, GhUser},
        ApiError,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    fn repository(name: &str, description: Option<&str>) -> GhRepository {
        GhRepository {
            name: name.into(),
            full_name: format!("alice/{name}"),
            owner: GhUser {
                login: "alice".into(),
            },
            description: description.map(Into::into),
        }
    }

    fn arrange_user(ctx: &mut CommandContextTest) {
        ctx.api_service
            .expect_user_get()
            .once()
            .withf(|token| token == "abcdef")
            .return_once(|_| {
                Ok(GhUser {
                    login: "alice".into(),
                })
            });
    }

    #[tokio::test]
    async fn configure_missing_repository() {
        let mut ctx = CommandContextTest::new();
        arrange_user(&mut ctx);
        ctx.api_service
            .expect_repositories_get()
            .once()
            .withf(|_, owner, name| owner == "alice" && name == "proj")
            .return_once(|_, _, _| {
                Err(ApiError::NotFound {
                    path: "/repos/alice/proj".into(),
                })
            });
        ctx.api_service
            .expect_repositories_create()
            .once()
            .withf(|_, name| name == "proj")
            .return_once(|_, _| Ok(repository("proj", None)));
        ctx.api_service
            .expect_repositories_update_description()
            .once()
            .withf(|_, owner, name, description| {
                owner == "alice" && name == "proj" && description == "A project"
            })
            .return_once(|_, _, _, _| Ok(repository("proj", Some("A project"))));

        let output = test_command(
            ctx,
            &[
                "configure",
                "--project-name",
                "proj",
                "--description",
                "A project",
            ],
        )
        .await
        .unwrap();

        assert_eq!(
            output,
            "Repository alice/proj created.\nDescription of repository alice/proj updated.\n"
        );
    }

    #[tokio::test]
    async fn configure_existing_repository() {
        let mut ctx = CommandContextTest::new();
        arrange_user(&mut ctx);
        ctx.api_service
            .expect_repositories_get()
            .once()
            .withf(|_, owner, name| owner == "alice" && name == "proj-rs")
            .return_once(|_, _, _| Ok(repository("proj-rs", Some("A project"))));

        let output = test_command(
            ctx,
            &[
                "configure",
                "--project-name",
                "proj",
                "--repository",
                "proj-rs",
                "--description",
                "A project",
            ],
        )
        .await
        .unwrap();

        assert_eq!(output, "Repository alice/proj-rs already exists.\n");
    }

    #[tokio::test]
    async fn configure_without_token() {
        let mut ctx = CommandContextTest::new();
        ctx.config.api.github.token = String::new();

        let error = test_command(ctx, &["configure", "--project-name", "proj"])
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Errors on environment variables:\n\n  - Missing env. var.: GHREPO_API_GITHUB_TOKEN"
        );
    }

    #[tokio::test]
    async fn configure_without_token_on_null_driver() {
        let mut ctx = CommandContextTest::new();
        ctx.config.api.driver = ApiDriver::Null;
        ctx.config.api.github.token = String::new();
        ctx.api_service.expect_user_get().never();

        let error = test_command(ctx, &["configure", "--project-name", "proj"])
            .await
            .unwrap_err();

        assert!(error.to_string().contains("GHREPO_API_GITHUB_TOKEN"));
    }
}
