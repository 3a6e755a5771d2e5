//! Character API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto, DeletedCharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag of the character endpoints
pub static CHARACTER_TAG: &str = "character";

/// Get the signed in user's characters, newest first
#[utoipa::path(
    get,
    path = "/api/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "The user's characters", body = Vec<CharacterDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let characters: Vec<CharacterDto> = CharacterService::new(&state.db)
        .get_user_characters(&user.id)
        .await?
        .into_iter()
        .map(CharacterDto::from)
        .collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character owned by the signed in user
#[utoipa::path(
    post,
    path = "/api/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "The created character", body = CharacterDto),
        (status = 400, description = "Missing name or unknown game system", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Json(character): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let character = CharacterService::new(&state.db)
        .create_character(&user.id, character)
        .await?;

    Ok((StatusCode::CREATED, Json(CharacterDto::from(character))))
}

/// Update a character, owner or admin only
#[utoipa::path(
    put,
    path = "/api/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character ID")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "The updated character", body = CharacterDto),
        (status = 400, description = "Invalid name or unknown game system", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the character's owner", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    session: Session,
    Path(character_id): Path<String>,
    Json(update): Json<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let character = CharacterService::new(&state.db)
        .update_character(&user, &character_id, update)
        .await?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}

/// Delete a character, owner or admin only
#[utoipa::path(
    delete,
    path = "/api/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character ID")),
    responses(
        (status = 200, description = "ID of the deleted character", body = DeletedCharacterDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the character's owner", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    Path(character_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let id = CharacterService::new(&state.db)
        .delete_character(&user, &character_id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedCharacterDto { id })))
}
