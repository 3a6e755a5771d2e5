//! World Anvil Boromir API client.
//!
//! Requests carry the application key and a user or application auth token as headers.
//! Responses go through [`ContentService::send`] so world, folder and block documents pick up
//! local overrides like every other proxied resource. The override key is the resource's
//! route under `/api/worldanvil`, e.g. `world/{id}` or `block/{id}`.

use reqwest::{Method, Url};
use serde_json::Value;

use crate::server::{
    content::ContentSource, error::Error, service::content::ContentService,
};

const APPLICATION_KEY_HEADER: &str = "x-application-key";
const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Application level World Anvil configuration
#[derive(Clone, Debug)]
pub struct WorldAnvilClient {
    source: ContentSource,
    app_key: Option<String>,
    auth_token: Option<String>,
}

impl WorldAnvilClient {
    /// Creates the client from the World Anvil source and application credentials
    pub fn new(source: ContentSource, app_key: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            source,
            app_key,
            auth_token,
        }
    }
}

/// World Anvil API calls made on behalf of the application or a user
pub struct WorldAnvilService<'a> {
    content: ContentService<'a>,
    client: &'a WorldAnvilClient,
    user_token: Option<&'a str>,
}

impl<'a> WorldAnvilService<'a> {
    /// Creates a new instance of [`WorldAnvilService`].
    ///
    /// `user_token` takes precedence over the application's auth token when present.
    pub fn new(
        content: ContentService<'a>,
        client: &'a WorldAnvilClient,
        user_token: Option<&'a str>,
    ) -> Self {
        Self {
            content,
            client,
            user_token,
        }
    }

    /// Full world document, overrides keyed by `world/{id}`
    pub async fn world(&self, world_id: &str) -> Result<Value, Error> {
        let url = self.url("world", &[("id", world_id), ("granularity", "-1")])?;

        self.request(Method::GET, url, Some(&format!("world/{}", world_id)))
            .await
    }

    /// Block folders of a world
    pub async fn block_folders(&self, world_id: &str) -> Result<Value, Error> {
        let url = self.url("world/blockfolders", &[("id", world_id), ("granularity", "1")])?;

        self.request(
            Method::POST,
            url,
            Some(&format!("world/{}/blockfolders", world_id)),
        )
        .await
    }

    /// Blocks inside a block folder
    pub async fn blocks(&self, folder_id: &str) -> Result<Value, Error> {
        let url = self.url("blockfolder/blocks", &[("id", folder_id)])?;

        self.request(
            Method::POST,
            url,
            Some(&format!("blockfolder/{}/blocks", folder_id)),
        )
        .await
    }

    /// A single block
    pub async fn block(&self, block_id: &str) -> Result<Value, Error> {
        let url = self.url("block", &[("id", block_id), ("granularity", "1")])?;

        self.request(Method::GET, url, Some(&format!("block/{}", block_id)))
            .await
    }

    /// Identity of the auth token's owner, never overridden
    pub async fn identity(&self) -> Result<Value, Error> {
        let url = self.url("identity", &[])?;

        self.request(Method::GET, url, None).await
    }

    fn url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.client.source.resolve(resource, None)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    async fn request(
        &self,
        method: Method,
        url: Url,
        override_key: Option<&str>,
    ) -> Result<Value, Error> {
        let mut request = self.content.http_client().request(method, url.clone());
        if let Some(app_key) = &self.client.app_key {
            request = request.header(APPLICATION_KEY_HEADER, app_key);
        }
        if let Some(token) = self.user_token.or(self.client.auth_token.as_deref()) {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        self.content
            .send(&self.client.source, url, request, override_key)
            .await
    }
}
