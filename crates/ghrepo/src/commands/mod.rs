//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ghrepo_config::Config;
use ghrepo_core::{CoreContext, CoreModule};
use ghrepo_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{configure::ConfigureCommand, show::ShowCommand};
use crate::Result;

mod configure;
mod overrides;
mod show;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Configure(ConfigureCommand),
    Show(ShowCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Configure(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
        }
    }
}
