use std::sync::Arc;

use clap::Parser;
use ghrepo_config::{ApiDriver, Config};
use ghrepo_core::CoreModule;
use ghrepo_ghapi_github::GithubApiService;
use ghrepo_ghapi_interface::ApiService;
use ghrepo_ghapi_null::NullApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(version, about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GithubApiService API driver");
                Box::new(GithubApiService::new(config.clone()))
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let ctx = CommandContext {
            config,
            api_service,
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
