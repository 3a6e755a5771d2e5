//! Linked account endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{is_user, LinkWorldAnvilDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, content::ContentError, request::RequestError, Error},
        model::{app::AppState, auth::WorldAnvilIdentity},
        service::{content::ContentService, user::UserService, world_anvil::WorldAnvilService},
    },
};

/// OpenAPI tag of the linked account endpoints
pub static ACCOUNT_TAG: &str = "account";

/// Shortest token World Anvil issues
const MIN_WORLD_ANVIL_TOKEN_LEN: usize = 10;

/// Link the signed in user's World Anvil account
///
/// The token is checked against World Anvil's identity endpoint before it is stored.
#[utoipa::path(
    post,
    path = "/api/account/worldanvil",
    tag = ACCOUNT_TAG,
    request_body = LinkWorldAnvilDto,
    responses(
        (status = 200, description = "The user with their World Anvil account linked", body = UserDto),
        (status = 400, description = "Invalid or rejected token, or invalid World Anvil identity", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto)
    ),
)]
pub async fn link_world_anvil(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|token| token.len() >= MIN_WORLD_ANVIL_TOKEN_LEN)
        .ok_or_else(|| {
            RequestError::validation(format!(
                "token must be a string of at least {} characters",
                MIN_WORLD_ANVIL_TOKEN_LEN
            ))
        })?
        .to_string();

    let identity = WorldAnvilService::new(
        ContentService::new(&state.db, &state.http_client),
        &state.world_anvil,
        Some(&token),
    )
    .identity()
    .await
    .map_err(|err| match err {
        Error::ContentError(ContentError::UpstreamStatus { status, .. })
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN =>
        {
            AuthError::InvalidIdentity("World Anvil").into()
        }
        err => err,
    })?;

    if !is_user(&identity) {
        return Err(AuthError::InvalidIdentity("World Anvil").into());
    }
    let identity: WorldAnvilIdentity = serde_json::from_value(identity)?;

    let Some(updated) = UserService::new(&state.db)
        .link_world_anvil(&user.id, identity, token)
        .await?
    else {
        return Err(AuthError::UserNotInDatabase(user.id).into());
    };

    tracing::info!(user_id = %updated.id, "Linked World Anvil account");

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}

/// Unlink the signed in user's World Anvil account
///
/// Clears the stored World Anvil id, username and token.
#[utoipa::path(
    delete,
    path = "/api/account/worldanvil",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "The user with their World Anvil account unlinked", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_world_anvil(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Some(updated) = UserService::new(&state.db)
        .unlink_world_anvil(&user.id)
        .await?
    else {
        return Err(AuthError::UserNotInDatabase(user.id).into());
    };

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}
