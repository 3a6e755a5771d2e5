//! Configuration errors raised while reading the environment at startup.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors reading the configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required variable unset or blank
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Variable set to a value that does not parse
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// Parse failure
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Configuration errors surfacing at request time are a deployment problem, not the caller's.
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
