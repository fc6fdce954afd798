use async_trait::async_trait;
use clap::Parser;
use ghrepo_core::use_cases::config::resolve_github_config::ResolveGithubConfigInterface;
use ghrepo_models::ProjectMetadata;
use shaku::HasComponent;

use super::overrides::GithubConfigArgs;
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the GitHub configuration and project metadata
#[derive(Parser)]
pub(crate) struct ShowCommand {
    /// Project name
    #[arg(long)]
    project_name: String,
    /// Project description
    #[arg(long)]
    description: Option<String>,
    #[command(flatten)]
    overrides: GithubConfigArgs,
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let uc: &dyn ResolveGithubConfigInterface = ctx.core_module.resolve_ref();
        let github_config = uc.run(
            &ctx.as_core_context(),
            &self.project_name,
            self.overrides.into(),
        )?;

        let mut metadata = ProjectMetadata::new(&self.project_name, self.description.as_deref());
        metadata.apply_github_config(&github_config);

        writeln!(
            ctx.writer.write().await,
            "GitHub configuration for project {}",
            self.project_name
        )?;
        writeln!(ctx.writer.write().await, "{:#?}", github_config)?;
        writeln!(ctx.writer.write().await, "{:#?}", metadata)?;

        Ok(())
    }
}
