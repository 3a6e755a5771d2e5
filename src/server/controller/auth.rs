//! Discord sign in, OAuth callback and logout endpoints.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            app::AppState,
            session::{
                auth::{SessionAuthCsrf, SessionAuthRedirect},
                user::SessionUserId,
            },
        },
        service::auth::{
            callback::CallbackService,
            login::{login_service, sanitize_callback_url, DEFAULT_CALLBACK_PATH},
        },
    },
};

/// OpenAPI tag of the authentication endpoints
pub static AUTH_TAG: &str = "auth";

/// Query of the sign in route
#[derive(Deserialize)]
pub struct SignInParams {
    /// Where to return after signing in, reduced to a same-site path
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Query Discord appends to the OAuth callback
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state issued at sign in
    pub state: String,
    /// Authorization code to exchange for a token
    pub code: String,
}

/// Sign in route to initiate login with Discord
///
/// Stores a CSRF state and the requested callback in session, then redirects the user to
/// Discord's authorize page.
#[utoipa::path(
    get,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    params(("callbackUrl" = Option<String>, Query, description = "Same-site path to return to after signing in")),
    responses(
        (status = 307, description = "Redirect to Discord's authorize page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SignInParams>,
) -> Result<impl IntoResponse, Error> {
    let callback = sanitize_callback_url(params.callback_url.as_deref(), &state.app_url);

    let login = login_service(&state.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;
    SessionAuthRedirect::insert(&session, &callback).await?;

    Ok(Redirect::temporary(&login.url))
}

/// Callback route Discord redirects to after the user authorizes the application
///
/// # Responses
/// - 307 (Temporary Redirect): Signed in, redirect to the stored callback path
/// - 400 (Bad Request): CSRF state mismatch, rejected code or invalid Discord profile
/// - 500 (Internal Server Error): No sign in in progress, Discord or database failure
#[utoipa::path(
    get,
    path = "/api/auth/callback/discord",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Discord"),
        ("code" = String, Query, description = "Authorization code returned by Discord")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the requested page"),
        (status = 400, description = "CSRF mismatch or rejected sign in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.state).await?;

    let user = CallbackService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord,
    )
    .handle_callback(&params.code)
    .await?;

    let redirect = SessionAuthRedirect::remove(&session)
        .await?
        .unwrap_or_else(|| DEFAULT_CALLBACK_PATH.to_string());

    session.cycle_id().await?;
    SessionUserId::insert(&session, &user.id).await?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok(Redirect::temporary(&redirect))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored errors, only clear when signed in
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}
