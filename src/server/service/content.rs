//! Read-through fetches of external content with local overrides applied.

use reqwest::{RequestBuilder, Url};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    model::content::ContentSourceKind,
    server::{
        content::{merge::merge_patch, ContentSource, ContentSources},
        data::content_override::ContentOverrideRepository,
        error::{content::ContentError, Error},
    },
};

/// Fetches upstream content and applies stored overrides
pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> ContentService<'a> {
    /// Creates a new instance of [`ContentService`]
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Client the service sends requests with
    pub fn http_client(&self) -> &'a reqwest::Client {
        self.http_client
    }

    /// Proxies an inbound route to the mounted source that serves it.
    ///
    /// # Returns
    /// - `Ok(Value)`: Upstream JSON with overrides applied
    /// - `Err(ContentError::RouteNotFound)`: No mount matches or the path escapes the base URL
    /// - `Err(ContentError::UpstreamNotFound)`: Upstream answered 404
    /// - `Err(ContentError::*)`: Transport failure, other non-success status or invalid JSON
    pub async fn fetch_route(
        &self,
        sources: &ContentSources,
        route: &str,
        query: Option<&str>,
    ) -> Result<Value, Error> {
        let source = sources
            .for_route(route)
            .ok_or_else(|| ContentError::RouteNotFound(route.to_string()))?;
        let url = source.resolve_route(route, query)?;

        self.get(source, url).await
    }

    /// GETs `url` from `source`, keying overrides by the URL's path under the source
    pub async fn get(&self, source: &ContentSource, url: Url) -> Result<Value, Error> {
        let key = source.resource_key(&url);
        let request = self.http_client.get(url.clone());

        self.send(source, url, request, Some(&key)).await
    }

    /// Sends a prepared request and parses the JSON response.
    ///
    /// Overrides stored under `override_key` are merged into the result, `None` skips them.
    pub async fn send(
        &self,
        source: &ContentSource,
        url: Url,
        request: RequestBuilder,
        override_key: Option<&str>,
    ) -> Result<Value, Error> {
        tracing::debug!(source = %source.kind(), url = %url, "Fetching upstream content");

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::UpstreamTransport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::UpstreamNotFound(url).into());
        }
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus { url, status }.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::UpstreamTransport {
                url: url.clone(),
                source: e,
            })?;
        let mut content: Value =
            serde_json::from_slice(&body).map_err(|e| ContentError::InvalidJson {
                url: url.clone(),
                source: e,
            })?;

        if let Some(key) = override_key {
            self.apply_overrides(source.kind(), key, &mut content)
                .await?;
        }

        Ok(content)
    }

    async fn apply_overrides(
        &self,
        source: ContentSourceKind,
        key: &str,
        content: &mut Value,
    ) -> Result<(), Error> {
        let overrides = ContentOverrideRepository::new(self.db)
            .get_for_resource(source, key)
            .await?;

        for content_override in &overrides {
            merge_patch(content, &content_override.patch);
        }

        if !overrides.is_empty() {
            tracing::debug!(
                source = %source,
                path = key,
                count = overrides.len(),
                "Applied content overrides"
            );
        }

        Ok(())
    }
}
