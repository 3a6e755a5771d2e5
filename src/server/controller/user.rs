//! Endpoints for the signed in user's own profile.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{is_partial_user, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, request::RequestError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag of the user endpoints
pub static USER_TAG: &str = "user";

/// Get the signed in user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The signed in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Edit the signed in user's profile
///
/// The body must carry a string `id` or an `email` that is a string or `null`. When an `id`
/// is present it must be the caller's own.
#[utoipa::path(
    put,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Invalid profile edit", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Editing another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if !is_partial_user(&body) {
        return Err(RequestError::validation("Invalid user").into());
    }
    let update: UpdateUserDto = serde_json::from_value(body)
        .map_err(|e| RequestError::validation(format!("Invalid user: {}", e)))?;

    if update.id.as_deref().is_some_and(|id| id != user.id) {
        return Err(RequestError::Forbidden.into());
    }

    let Some(updated) = UserService::new(&state.db)
        .update_profile(&user.id, update)
        .await?
    else {
        return Err(AuthError::UserNotInDatabase(user.id).into());
    };

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}

/// Deactivate the signed in user's account and sign them out
#[utoipa::path(
    delete,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The deactivated user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Some(deactivated) = UserService::new(&state.db).deactivate(&user.id).await? else {
        return Err(AuthError::UserNotInDatabase(user.id).into());
    };

    session.clear().await;

    Ok((StatusCode::OK, Json(UserDto::from(deactivated))))
}
