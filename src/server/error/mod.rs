//! Error types for the Crit Fumble server.
//!
//! Domain errors (authentication, configuration, content proxying, request validation and
//! cron jobs) live in their own submodules and are aggregated together with library errors
//! into [`Error`]. Every error implements `IntoResponse` so controllers can return them
//! directly with `?`.

pub mod auth;
pub mod config;
pub mod content;
pub mod cron;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, content::ContentError, cron::CronError,
        request::RequestError,
    },
};

/// Main error type for the server.
///
/// Domain errors map to their own status codes, library errors are logged and returned
/// as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, OAuth exchange, identity validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Content proxy error (unroutable path, upstream failure).
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Invalid, forbidden or unmatched API request.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Cron job management error.
    #[error(transparent)]
    CronError(#[from] CronError),
    /// Internal error indicating a bug in the server.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error outside of the content proxy.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// URL parse error.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
    /// JSON serialization error.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::CronError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details are not
/// exposed to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
