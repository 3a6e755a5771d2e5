//! Shared application state handed to every handler.

use reqwest::Url;
use sea_orm::DatabaseConnection;

use crate::server::{
    content::ContentSources, model::auth::DiscordOAuthClient, scheduler::CronJobManager,
    service::{discord::DiscordApi, world_anvil::WorldAnvilClient},
};

/// State shared by every handler, cheap to clone
#[derive(Clone)]
pub struct AppState {
    /// Public base URL, sign in callbacks may only point at this origin
    pub app_url: Url,
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Client for every upstream request
    pub http_client: reqwest::Client,
    /// Upstream content sources and their mounts
    pub content: ContentSources,
    /// Discord OAuth client used for sign in
    pub oauth_client: DiscordOAuthClient,
    /// Discord REST client, holds the bot token when configured
    pub discord: DiscordApi,
    /// World Anvil source and application credentials
    pub world_anvil: WorldAnvilClient,
    /// Manager of the bot's cron jobs
    pub cron: CronJobManager,
}
