//! Admin endpoints for content overrides and the bot's cron jobs.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bot::{CronJobDto, ToggleCronJobDto},
        content::{
            ContentOverrideDto, ContentSourceKind, DeleteContentOverrideDto,
            UpsertContentOverrideDto,
        },
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_admin},
        data::content_override::ContentOverrideRepository,
        error::{cron::CronError, request::RequestError, Error},
        model::app::AppState,
    },
};

/// OpenAPI tag of the admin endpoints
pub static ADMIN_TAG: &str = "admin";

/// Reduces a submitted path to the key the proxy looks overrides up by.
///
/// The path is resolved against the source's base URL the same way proxied routes are, so
/// `spells/fire bolt.json` and `./spells/fire%20bolt.json` share one key.
fn override_key(
    state: &AppState,
    source: ContentSourceKind,
    path: &str,
) -> Result<String, RequestError> {
    let required = || RequestError::validation("path is required");

    let path = path.trim().trim_start_matches('/');
    if path.is_empty() {
        return Err(required());
    }

    let content_source = state.content.get(source);
    let url = content_source
        .resolve(path, None)
        .map_err(|_| RequestError::validation("path must stay within the content source"))?;

    let key = content_source.resource_key(&url);
    if key.is_empty() {
        return Err(required());
    }

    Ok(key)
}

/// Create or replace the override patch for a content resource
#[utoipa::path(
    put,
    path = "/api/admin/content-overrides",
    tag = ADMIN_TAG,
    request_body = UpsertContentOverrideDto,
    responses(
        (status = 200, description = "The stored override", body = ContentOverrideDto),
        (status = 400, description = "Missing path or path outside the source", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_content_override(
    State(state): State<AppState>,
    session: Session,
    Json(content_override): Json<UpsertContentOverrideDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_admin(&user)?;

    let path = override_key(&state, content_override.source, &content_override.path)?;
    let stored = ContentOverrideRepository::new(&state.db)
        .upsert(content_override.source, &path, content_override.patch)
        .await?;

    tracing::info!(
        user_id = %user.id,
        source = %content_override.source,
        path,
        "Stored content override"
    );

    Ok((StatusCode::OK, Json(ContentOverrideDto::from(stored))))
}

/// Delete the overrides of a content resource
#[utoipa::path(
    delete,
    path = "/api/admin/content-overrides",
    tag = ADMIN_TAG,
    request_body = DeleteContentOverrideDto,
    responses(
        (status = 204, description = "Overrides deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "No override for the resource", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_content_override(
    State(state): State<AppState>,
    session: Session,
    Json(content_override): Json<DeleteContentOverrideDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_admin(&user)?;

    let path = override_key(&state, content_override.source, &content_override.path)?;
    let result = ContentOverrideRepository::new(&state.db)
        .delete(content_override.source, &path)
        .await?;

    if result.rows_affected == 0 {
        return Err(RequestError::NotFound("Content override").into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the bot's cron jobs and whether each is running
#[utoipa::path(
    get,
    path = "/api/admin/bot/cronjobs",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Known cron jobs", body = Vec<CronJobDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_cron_jobs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_admin(&user)?;

    Ok((StatusCode::OK, Json(state.cron.jobs().await)))
}

/// Start or stop one of the bot's cron jobs
#[utoipa::path(
    post,
    path = "/api/admin/bot/cronjobs/toggle",
    tag = ADMIN_TAG,
    request_body = ToggleCronJobDto,
    responses(
        (status = 200, description = "The job after toggling", body = CronJobDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Unknown job", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_cron_job(
    State(state): State<AppState>,
    session: Session,
    Json(toggle): Json<ToggleCronJobDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_admin(&user)?;

    if toggle.enabled {
        state.cron.start_job(&toggle.name).await?;
    } else {
        state.cron.stop_job(&toggle.name).await?;
    }

    tracing::info!(user_id = %user.id, job = %toggle.name, enabled = toggle.enabled, "Toggled cron job");

    let job = state
        .cron
        .jobs()
        .await
        .into_iter()
        .find(|job| job.name == toggle.name)
        .ok_or(CronError::UnknownJob(toggle.name))?;

    Ok((StatusCode::OK, Json(job)))
}
