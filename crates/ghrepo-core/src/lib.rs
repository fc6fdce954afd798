//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    config::resolve_github_config::ResolveGithubConfig,
    repositories::configure_github_repository::ConfigureGithubRepository,
};

module! {
    pub CoreModule {
        components = [
            ResolveGithubConfig, ConfigureGithubRepository
        ],
        providers = []
    }
}
