//! Party API endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, party::PartyDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::party::PartyService,
    },
};

/// OpenAPI tag of the party endpoints
pub static PARTY_TAG: &str = "party";

/// Get the parties any of the signed in user's characters belong to
#[utoipa::path(
    get,
    path = "/api/party",
    tag = PARTY_TAG,
    responses(
        (status = 200, description = "Parties of the user's characters", body = Vec<PartyDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parties(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let parties = PartyService::new(&state.db).get_user_parties(&user.id).await?;

    Ok((StatusCode::OK, Json(parties)))
}
