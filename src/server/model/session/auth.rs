//! Session values that only live for the duration of an OAuth sign in.
//!
//! The CSRF state is stored when the user is sent to Discord and consumed by the callback.
//! The redirect is the same-site path the user asked for before signing in.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the OAuth CSRF state.
pub const SESSION_AUTH_CSRF_KEY: &str = "crit_fumble:auth:csrf";
/// Session key for the path to return to after signing in.
pub const SESSION_AUTH_REDIRECT_KEY: &str = "crit_fumble:auth:redirect";

/// Session wrapper for the CSRF state issued at sign in.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state into the session.
    ///
    /// The callback compares it against the `state` Discord echoes back.
    ///
    /// # Arguments
    /// - `session` - Session of the user signing in
    /// - `state` - Random state embedded in the authorize URL
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the CSRF state so it can only be used once.
    ///
    /// Fails with [`AuthError::CsrfMissingValue`] when no state is stored.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

/// Session wrapper for the same-site path requested before signing in.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthRedirect(pub String);

impl SessionAuthRedirect {
    /// Inserts the sanitized callback path into the session
    pub async fn insert(session: &Session, path: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_REDIRECT_KEY, SessionAuthRedirect(path.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the stored redirect path, if any
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionAuthRedirect>(SESSION_AUTH_REDIRECT_KEY)
            .await?
            .map(|SessionAuthRedirect(path)| path))
    }
}
