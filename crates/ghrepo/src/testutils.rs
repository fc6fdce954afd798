use std::{io::Write, sync::Arc};

use clap::Parser;
use ghrepo_config::{ApiDriver, Config};
use ghrepo_core::CoreModule;
use ghrepo_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version().unwrap();
        config.github_user = None;
        config.api.driver = ApiDriver::GitHub;
        config.api.github.token = "abcdef".into();

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let command_args = {
        let mut tmp_args = vec!["ghrepo"];
        tmp_args.extend(command_args);
        tmp_args
    };

    let args = match Args::try_parse_from(command_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    };
    CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;

    let vec = buf.read().await.to_vec();
    Ok(std::str::from_utf8(&vec).unwrap().to_string())
}
