//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every JSON endpoint is registered with its utoipa annotation so the generated document at
//! `/api/docs/openapi.json` stays in sync with the handlers. Content proxy routes are added
//! as plain axum routes because their upstream payloads are untyped.

use axum::{routing::post, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    content::{SRD_MOUNT, TOOLS_DATA_MOUNT, TOOLS_MOUNT},
    controller,
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/signin` - Start Discord sign in, honours `callbackUrl`
/// - `GET /api/auth/callback/discord` - OAuth callback handler
/// - `GET|POST /api/auth/logout` - Sign out
/// - `GET|PUT|DELETE /api/user` - Current user
/// - `GET|POST /api/character`, `PUT|DELETE /api/character/{id}` - Characters
/// - `GET /api/party`, `GET|POST /api/campaign`, `GET /api/systems`
/// - `GET /api/worldanvil/...` - World Anvil pass-through
/// - `POST /api/account/worldanvil` - Link a World Anvil account
/// - `DELETE /api/account/worldanvil` - Unlink the World Anvil account
/// - `/api/admin/...` - Content overrides and bot cron jobs
/// - `/dashboard`, `/character/{slug}`, `/system/dnd5e`, `/world/{slug}` - Page props
/// - Content proxy mounts for the SRD API, 5eTools and 5eTools data
///
/// Swagger UI is served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Crit Fumble", description = "Crit Fumble API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Discord sign in"),
        (name = controller::user::USER_TAG, description = "Current user"),
        (name = controller::character::CHARACTER_TAG, description = "Characters"),
        (name = controller::party::PARTY_TAG, description = "Parties"),
        (name = controller::campaign::CAMPAIGN_TAG, description = "Campaigns"),
        (name = controller::system::SYSTEM_TAG, description = "Supported game systems"),
        (name = controller::world_anvil::WORLD_ANVIL_TAG, description = "World Anvil pass-through"),
        (name = controller::account::ACCOUNT_TAG, description = "Linked accounts"),
        (name = controller::admin::ADMIN_TAG, description = "Administration"),
        (name = controller::page::PAGE_TAG, description = "Page props"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signin))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::party::get_parties))
        .routes(routes!(
            controller::campaign::get_campaigns,
            controller::campaign::create_campaign
        ))
        .routes(routes!(controller::system::get_systems))
        .routes(routes!(controller::world_anvil::get_world))
        .routes(routes!(controller::world_anvil::get_block_folders))
        .routes(routes!(controller::world_anvil::get_blocks))
        .routes(routes!(controller::world_anvil::get_block))
        .routes(routes!(
            controller::account::link_world_anvil,
            controller::account::unlink_world_anvil
        ))
        .routes(routes!(
            controller::admin::upsert_content_override,
            controller::admin::delete_content_override
        ))
        .routes(routes!(controller::admin::get_cron_jobs))
        .routes(routes!(controller::admin::toggle_cron_job))
        .routes(routes!(controller::page::dashboard))
        .routes(routes!(controller::page::character_page))
        .routes(routes!(controller::page::compendium_page))
        .routes(routes!(controller::page::world_page))
        .split_for_parts();

    let mut routes = routes.route("/api/auth/logout", post(controller::auth::logout));

    for mount in [SRD_MOUNT, TOOLS_MOUNT, TOOLS_DATA_MOUNT] {
        let proxy = axum::routing::get(controller::proxy::proxy_content)
            .post(controller::proxy::proxy_content);

        routes = routes
            .route(mount, proxy.clone())
            .route(&format!("{mount}/{{*path}}"), proxy);
    }

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
