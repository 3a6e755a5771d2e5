//! Read-through proxy for the mounted content sources.

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::server::{error::Error, model::app::AppState, service::content::ContentService};

/// Proxies a request under one of the content mounts to its upstream source.
///
/// GET and POST both issue an upstream GET. The query string is forwarded.
///
/// # Responses
/// - 200 (OK): Upstream JSON with local overrides applied
/// - 404 (Not Found): No mount serves the path, the path escapes the source, or upstream 404
/// - 502 (Bad Gateway): Upstream unreachable, failed or returned something other than JSON
pub async fn proxy_content(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let content = ContentService::new(&state.db, &state.http_client)
        .fetch_route(&state.content, uri.path(), uri.query())
        .await?;

    Ok((StatusCode::OK, Json(content)))
}
