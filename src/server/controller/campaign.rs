//! Campaign API endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        campaign::{CampaignDto, CreateCampaignDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::campaign::CampaignService,
    },
};

/// OpenAPI tag of the campaign endpoints
pub static CAMPAIGN_TAG: &str = "campaign";

/// Get the campaigns the signed in user runs as GM
#[utoipa::path(
    get,
    path = "/api/campaign",
    tag = CAMPAIGN_TAG,
    responses(
        (status = 200, description = "Campaigns the user GMs", body = Vec<CampaignDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaigns(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let campaigns: Vec<CampaignDto> = CampaignService::new(&state.db)
        .get_gm_campaigns(&user.id)
        .await?
        .into_iter()
        .map(CampaignDto::from)
        .collect();

    Ok((StatusCode::OK, Json(campaigns)))
}

/// Create a campaign with the signed in user as GM
#[utoipa::path(
    post,
    path = "/api/campaign",
    tag = CAMPAIGN_TAG,
    request_body = CreateCampaignDto,
    responses(
        (status = 201, description = "The created campaign", body = CampaignDto),
        (status = 400, description = "Missing name or unknown game system", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    session: Session,
    Json(campaign): Json<CreateCampaignDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let campaign = CampaignService::new(&state.db)
        .create_campaign(&user.id, campaign)
        .await?;

    Ok((StatusCode::CREATED, Json(CampaignDto::from(campaign))))
}
