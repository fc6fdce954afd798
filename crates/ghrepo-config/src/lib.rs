//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub account or organization owning the repositories.
    pub github_user: Option<String>,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            github_user: env_to_optional_str("GHREPO_GITHUB_USER"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("GHREPO_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("GHREPO_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GHREPO_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("GHREPO_API_GITHUB_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("GHREPO_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

fn env_to_optional_str(name: &str) -> Option<String> {
    env::var(name).ok().filter(|e| !e.is_empty())
}
