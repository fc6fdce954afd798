//! Validation utilities.

use std::fmt::Write;

use ghrepo_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn missing(error: &mut String, name: &str) {
    error.push('\n');
    write!(error, "  - Missing env. var.: {}", name).unwrap();
}

fn into_result(error: String) -> Result<(), ValidationError> {
    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    let mut error = String::new();

    if config.api.driver == ApiDriver::GitHub {
        if config.api.github.root_url.is_empty() {
            missing(&mut error, "GHREPO_API_GITHUB_ROOT_URL");
        }
        if config.api.github.connect_timeout == 0 {
            missing(&mut error, "GHREPO_API_GITHUB_CONNECT_TIMEOUT");
        }
    }

    into_result(error)
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

/// Validate credentials needed to reach the API, whatever the driver.
pub fn validate_api_credentials(config: &Config) -> Result<(), ValidationError> {
    let mut error = String::new();

    if config.api.github.token.is_empty() {
        missing(&mut error, "GHREPO_API_GITHUB_TOKEN");
    }

    into_result(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.driver = ApiDriver::GitHub;
        config.api.github.root_url = "https://api.github.com".into();
        config.api.github.connect_timeout = 5000;
        config.api.github.token = "abcdef".into();
        config
    }

    #[test]
    fn test_validate_configuration() {
        let mut config = arrange_config();
        assert!(validate_configuration(&config).is_ok());

        config.api.github.root_url = String::new();
        config.api.github.connect_timeout = 0;
        let errors = validate_configuration(&config).unwrap_err().to_string();
        assert!(errors.contains("GHREPO_API_GITHUB_ROOT_URL"));
        assert!(errors.contains("GHREPO_API_GITHUB_CONNECT_TIMEOUT"));

        config.api.driver = ApiDriver::Null;
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_validate_api_credentials() {
        let mut config = arrange_config();
        assert!(validate_api_credentials(&config).is_ok());

        config.api.github.token = String::new();
        assert!(matches!(
            validate_api_credentials(&config),
            Err(ValidationError::EnvVarsError { errors }) if errors.contains("GHREPO_API_GITHUB_TOKEN")
        ));

        config.api.driver = ApiDriver::Null;
        assert!(matches!(
            validate_api_credentials(&config),
            Err(ValidationError::EnvVarsError { errors }) if errors.contains("GHREPO_API_GITHUB_TOKEN")
        ));

        config.api.github.token = "abcdef".into();
        assert!(validate_api_credentials(&config).is_ok());
    }
}
