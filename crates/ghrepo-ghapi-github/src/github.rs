//! GitHub adapter

use async_trait::async_trait;
use ghrepo_config::Config;
use ghrepo_ghapi_interface::{
    types::{GhRepository, GhUser},
    ApiService, Result,
};
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self, token: &str) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config, token)?.build()?)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        build_github_url(&self.config, segments)
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, GitHubError> {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: String,
        }

        let url = self.build_url(segments)?;
        let path = url.path().to_string();

        let mut request = self.get_client(token)?.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_default();

        Err(GitHubError::StatusError {
            path,
            status,
            message,
        })
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self, token), ret)]
    async fn user_get(&self, token: &str) -> Result<GhUser> {
        Ok(self
            .send(token, Method::GET, &["user"], None::<&()>)
            .await?)
    }

    #[tracing::instrument(skip(self, token), ret)]
    async fn repositories_get(
        &self,
        token: &str,
        owner: &str,
        name: &str,
    ) -> Result<GhRepository> {
        Ok(self
            .send(token, Method::GET, &["repos", owner, name], None::<&()>)
            .await?)
    }

    #[tracing::instrument(skip(self, token), ret)]
    async fn repositories_create(&self, token: &str, name: &str) -> Result<GhRepository> {
        #[derive(Serialize)]
        struct Request<'a> {
            name: &'a str,
        }

        Ok(self
            .send(
                token,
                Method::POST,
                &["user", "repos"],
                Some(&Request { name }),
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token), ret)]
    async fn repositories_update_description(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        description: &str,
    ) -> Result<GhRepository> {
        #[derive(Serialize)]
        struct Request<'a> {
            description: &'a str,
        }

        Ok(self
            .send(
                token,
                Method::PATCH,
                &["repos", owner, name],
                Some(&Request { description }),
            )
            .await?)
    }
}
