//! World Anvil pass-through endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{content::ContentService, user::UserService, world_anvil::WorldAnvilService},
    },
};

/// OpenAPI tag of the World Anvil endpoints
pub static WORLD_ANVIL_TAG: &str = "worldanvil";

/// World Anvil resources a controller can fetch
enum Resource<'a> {
    World(&'a str),
    BlockFolders(&'a str),
    Blocks(&'a str),
    Block(&'a str),
}

/// Fetches `resource` with the signed in user's linked token, or the application token
async fn fetch(state: &AppState, session: &Session, resource: Resource<'_>) -> Result<Value, Error> {
    let user = get_user_from_session(state, session).await?;
    let token = UserService::new(&state.db)
        .world_anvil_token(&user.id)
        .await?;

    let world_anvil = WorldAnvilService::new(
        ContentService::new(&state.db, &state.http_client),
        &state.world_anvil,
        token.as_deref(),
    );

    match resource {
        Resource::World(id) => world_anvil.world(id).await,
        Resource::BlockFolders(id) => world_anvil.block_folders(id).await,
        Resource::Blocks(id) => world_anvil.blocks(id).await,
        Resource::Block(id) => world_anvil.block(id).await,
    }
}

/// Get a World Anvil world
#[utoipa::path(
    get,
    path = "/api/worldanvil/world/{id}",
    tag = WORLD_ANVIL_TAG,
    params(("id" = String, Path, description = "World Anvil world ID")),
    responses(
        (status = 200, description = "The world document", body = Object),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "World not found", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto)
    ),
)]
pub async fn get_world(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let world = fetch(&state, &session, Resource::World(&id)).await?;

    Ok((StatusCode::OK, Json(world)))
}

/// Get the block folders of a World Anvil world
#[utoipa::path(
    get,
    path = "/api/worldanvil/world/{id}/blockfolders",
    tag = WORLD_ANVIL_TAG,
    params(("id" = String, Path, description = "World Anvil world ID")),
    responses(
        (status = 200, description = "The world's block folders", body = Object),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "World not found", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto)
    ),
)]
pub async fn get_block_folders(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let folders = fetch(&state, &session, Resource::BlockFolders(&id)).await?;

    Ok((StatusCode::OK, Json(folders)))
}

/// Get the blocks in a World Anvil block folder
#[utoipa::path(
    get,
    path = "/api/worldanvil/blockfolder/{id}/blocks",
    tag = WORLD_ANVIL_TAG,
    params(("id" = String, Path, description = "World Anvil block folder ID")),
    responses(
        (status = 200, description = "The folder's blocks", body = Object),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Block folder not found", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto)
    ),
)]
pub async fn get_blocks(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let blocks = fetch(&state, &session, Resource::Blocks(&id)).await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// Get a World Anvil block
#[utoipa::path(
    get,
    path = "/api/worldanvil/block/{id}",
    tag = WORLD_ANVIL_TAG,
    params(("id" = String, Path, description = "World Anvil block ID")),
    responses(
        (status = 200, description = "The block document", body = Object),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Block not found", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto)
    ),
)]
pub async fn get_block(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let block = fetch(&state, &session, Resource::Block(&id)).await?;

    Ok((StatusCode::OK, Json(block)))
}
