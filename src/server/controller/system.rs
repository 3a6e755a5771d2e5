//! Game system listing endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::system::{GameSystem, GAME_SYSTEMS};

/// OpenAPI tag of the game system endpoints
pub static SYSTEM_TAG: &str = "system";

/// List the supported game systems
#[utoipa::path(
    get,
    path = "/api/systems",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Supported game systems", body = Vec<GameSystem>)
    ),
)]
pub async fn get_systems() -> impl IntoResponse {
    (StatusCode::OK, Json(GAME_SYSTEMS))
}
