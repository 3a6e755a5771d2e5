//! Helpers resolving the signed in user for API and page handlers.

use axum::http::Uri;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, request::RequestError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves the signed in user from session and then from database
///
/// # Returns
/// - `Ok(UserDto)`: Active user found
/// - `Err(AuthError::UserNotInSession)`: User ID not present in session
/// - `Err(AuthError::UserNotInDatabase)`: User ID in session but not in database (session is cleared)
/// - `Err(AuthError::UserDeactivated)`: User has deactivated their account (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserService::new(&state.db).get_user(&user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    if user.deactivated_at.is_some() {
        session.clear().await;

        return Err(AuthError::UserDeactivated(user_id).into());
    }

    Ok(user.into())
}

/// Like [`get_user_from_session`] but unauthenticated visitors are sent to sign in.
///
/// The original path and query of `uri` become the sign in's `callbackUrl`.
pub async fn get_page_user(
    state: &AppState,
    session: &Session,
    uri: &Uri,
) -> Result<UserDto, Error> {
    match get_user_from_session(state, session).await {
        Err(Error::AuthError(
            AuthError::UserNotInSession
            | AuthError::UserNotInDatabase(_)
            | AuthError::UserDeactivated(_),
        )) => {
            let callback = uri
                .path_and_query()
                .map(|path_and_query| path_and_query.as_str())
                .unwrap_or("/");

            Err(AuthError::SignInRequired(callback.to_string()).into())
        }
        result => result,
    }
}

/// Fails with 403 unless `user` is an admin
pub fn require_admin(user: &UserDto) -> Result<(), Error> {
    if !user.admin {
        tracing::debug!(user_id = %user.id, "Non-admin user attempted an admin action");
        return Err(RequestError::Forbidden.into());
    }

    Ok(())
}
