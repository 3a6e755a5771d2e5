//! Errors for invalid, forbidden or unmatched API requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors caused by the content of an API request rather than by the server
#[derive(Error, Debug)]
pub enum RequestError {
    /// Body or parameters failed validation, answered with 400
    #[error("{0}")]
    Validation(String),
    /// Signed in user may not perform the action
    #[error("Access denied")]
    Forbidden,
    /// Named resource does not exist or is not visible to the user
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl RequestError {
    /// Builds a [`RequestError::Validation`]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        error_response(status, self.to_string())
    }
}
