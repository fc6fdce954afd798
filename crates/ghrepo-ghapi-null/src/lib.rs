//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghrepo_ghapi_interface::{
    types::{GhRepository, GhUser},
    ApiService, Result,
};

const NULL_LOGIN: &str = "null";

/// Null API service.
///
/// Never reaches the network: every repository already exists, without
/// description.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

fn null_repository(owner: &str, name: &str, description: Option<&str>) -> GhRepository {
    GhRepository {
        name: name.into(),
        full_name: format!("{owner}/{name}"),
        owner: GhUser {
            login: owner.into(),
        },
        description: description.map(Into::into),
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self, _token), ret)]
    async fn user_get(&self, _token: &str) -> Result<GhUser> {
        Ok(GhUser {
            login: NULL_LOGIN.into(),
        })
    }

    #[tracing::instrument(skip(self, _token), ret)]
    async fn repositories_get(
        &self,
        _token: &str,
        owner: &str,
        name: &str,
    ) -> Result<GhRepository> {
        Ok(null_repository(owner, name, None))
    }

    #[tracing::instrument(skip(self, _token), ret)]
    async fn repositories_create(&self, _token: &str, name: &str) -> Result<GhRepository> {
        Ok(null_repository(NULL_LOGIN, name, None))
    }

    #[tracing::instrument(skip(self, _token), ret)]
    async fn repositories_update_description(
        &self,
        _token: &str,
        owner: &str,
        name: &str,
        description: &str,
    ) -> Result<GhRepository> {
        Ok(null_repository(owner, name, Some(description)))
    }
}
