//! Errors raised by the content proxy and upstream fetches.
//!
//! Unroutable paths and upstream 404s become 404 responses; every other upstream failure
//! is reported as 502.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Url;
use thiserror::Error;

use crate::server::error::error_response;

/// Failures routing to or fetching from a content source.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Inbound path is outside every mount or escapes the source's base URL.
    #[error("No content source serves path {0:?}")]
    RouteNotFound(String),
    /// Upstream answered 404
    #[error("Upstream resource {0} not found")]
    UpstreamNotFound(Url),
    /// Upstream answered another non-success status
    #[error("Upstream request to {url} failed with status {status}")]
    UpstreamStatus {
        /// Requested URL
        url: Url,
        /// Status the upstream answered with
        status: reqwest::StatusCode,
    },
    /// Request could not be sent or the body not read
    #[error("Upstream request to {url} failed: {source}")]
    UpstreamTransport {
        /// Requested URL
        url: Url,
        /// Client error
        #[source]
        source: reqwest::Error,
    },
    /// Upstream body is not JSON
    #[error("Upstream response from {url} is not valid JSON: {source}")]
    InvalidJson {
        /// Requested URL
        url: Url,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
    /// Upstream JSON lacks fields the server relies on
    #[error("Upstream response from {0} does not have the expected shape")]
    UnexpectedShape(Url),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            Self::RouteNotFound(_) | Self::UpstreamNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Resource not found")
            }
            Self::UpstreamStatus { .. }
            | Self::UpstreamTransport { .. }
            | Self::InvalidJson { .. }
            | Self::UnexpectedShape(_) => {
                tracing::warn!("{}", self);

                error_response(StatusCode::BAD_GATEWAY, "Upstream content unavailable")
            }
        }
    }
}
