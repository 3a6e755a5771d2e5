//! Authentication errors: missing sessions, CSRF failures, OAuth exchange and identity
//! validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use oauth2::url::form_urlencoded;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Path of the sign-in route unauthenticated page requests are sent to
pub static SIGN_IN_PATH: &str = "/api/auth/signin";

/// Authentication and sign in failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// Session points at a user that no longer exists
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(String),
    /// Session user deactivated their account
    #[error("User ID {0:?} is deactivated")]
    UserDeactivated(String),
    /// Page visited without signing in, holds the path to return to
    #[error("Sign in required to access {0:?}")]
    SignInRequired(String),
    /// OAuth state does not match the one issued at sign in
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    /// OAuth state key present in session without a value
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    /// Discord refused the authorization code
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchangeFailed(String),
    /// Identity provider rejected the credentials or returned an unusable identity
    #[error("{0} identity could not be validated")]
    InvalidIdentity(&'static str),
}

impl AuthError {
    /// Location of the sign-in route carrying `callback` as the URL-encoded `callbackUrl`
    pub fn sign_in_location(callback: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(callback.as_bytes()).collect();

        format!("{}?callbackUrl={}", SIGN_IN_PATH, encoded)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::UserDeactivated(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::SignInRequired(callback) => {
                tracing::debug!(callback = %callback, "Redirecting to sign in");

                Redirect::temporary(&Self::sign_in_location(&callback)).into_response()
            }
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::InvalidIdentity(provider) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("{} did not return a valid user", provider),
                )
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
        }
    }
}
