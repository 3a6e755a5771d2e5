//! Page endpoints returning the props each signed in page renders from.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        page::{CharacterPageProps, CompendiumPageProps, DashboardPageProps, WorldPageProps},
    },
    server::{
        controller::util::get_user::get_page_user, error::Error, model::app::AppState,
        service::page::PageService,
    },
};

/// OpenAPI tag of the page endpoints
pub static PAGE_TAG: &str = "page";

/// Props of the dashboard page
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Dashboard props", body = DashboardPageProps),
        (status = 307, description = "Not signed in, redirect to sign in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let user = get_page_user(&state, &session, &uri).await?;

    let props = PageService::new(&state).dashboard(user).await?;

    Ok((StatusCode::OK, Json(props)))
}

/// Props of a character's page
#[utoipa::path(
    get,
    path = "/character/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Character slug")),
    responses(
        (status = 200, description = "Character page props", body = CharacterPageProps),
        (status = 307, description = "Not signed in, redirect to sign in"),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn character_page(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_page_user(&state, &session, &uri).await?;

    let props = PageService::new(&state).character(user, &slug).await?;

    Ok((StatusCode::OK, Json(props)))
}

/// Props of the D&D 5e compendium page
#[utoipa::path(
    get,
    path = "/system/dnd5e",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Compendium page props", body = CompendiumPageProps),
        (status = 307, description = "Not signed in, redirect to sign in"),
        (status = 502, description = "SRD API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compendium_page(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let user = get_page_user(&state, &session, &uri).await?;

    let props = PageService::new(&state).compendium(user).await?;

    Ok((StatusCode::OK, Json(props)))
}

/// Props of a campaign's World Anvil world page
#[utoipa::path(
    get,
    path = "/world/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Campaign slug")),
    responses(
        (status = 200, description = "World page props", body = WorldPageProps),
        (status = 307, description = "Not signed in, redirect to sign in"),
        (status = 404, description = "World not found", body = ErrorDto),
        (status = 502, description = "World Anvil unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn world_page(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_page_user(&state, &session, &uri).await?;

    let props = PageService::new(&state).world(user, &slug).await?;

    Ok((StatusCode::OK, Json(props)))
}
