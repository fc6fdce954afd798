//! Auth.

use std::time::Duration;

use ghrepo_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;
use url::Url;

use crate::errors::GitHubError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get a GitHub client builder authenticated with a token.
pub fn get_authenticated_client_builder(
    config: &Config,
    token: &str,
) -> Result<ClientBuilder, GitHubError> {
    if token.is_empty() {
        return Err(GitHubError::MissingToken);
    }

    let builder = get_anonymous_client_builder(config)?;

    let mut authorization = header::HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| GitHubError::InvalidToken { source: e })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_MEDIA_TYPE),
    );
    headers.insert(
        GITHUB_API_VERSION_HEADER,
        header::HeaderValue::from_static(GITHUB_API_VERSION),
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("ghrepo/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL from path segments.
///
/// Each segment is percent-encoded, so `?`, `#` or `/` in a segment never
/// change the targeted resource.
pub fn build_github_url(config: &Config, segments: &[&str]) -> Result<Url, GitHubError> {
    let root_url = &config.api.github.root_url;
    let mut url = Url::parse(root_url).map_err(|e| GitHubError::InvalidRootUrl {
        url: root_url.clone(),
        source: e,
    })?;

    url.path_segments_mut()
        .map_err(|_| GitHubError::RootUrlCannotBeABase {
            url: root_url.clone(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
