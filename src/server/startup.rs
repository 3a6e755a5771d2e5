//! Construction of the clients, connections and state the server runs on.

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use reqwest::Url;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    content::ContentSources,
    error::Error,
    model::{app::AppState, auth::DiscordOAuthClient},
    scheduler::{CronJobManager, JobContext},
    service::{discord::DiscordApi, world_anvil::WorldAnvilClient},
};

/// Build the Discord OAuth2 client, callbacks land on `{APP_URL}/api/auth/callback/discord`
pub fn build_oauth_client(config: &Config) -> Result<DiscordOAuthClient, Error> {
    let redirect_url = format!(
        "{}/api/auth/callback/discord",
        config.app_url.trim_end_matches('/')
    );

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(redirect_url)?);

    Ok(client)
}

/// Build the shared HTTP client used for OAuth, Discord, World Anvil and the content proxy
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Cookies are only marked secure in release builds so local HTTP development works
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Assemble the application state from the configuration and an open database connection.
///
/// The cron manager is created with the default jobs registered but nothing scheduled, call
/// [`CronJobManager::start`] to begin running them.
pub async fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    let app_url = Url::parse(&config.app_url)?;
    let http_client = build_http_client(config)?;
    let content = ContentSources::from_config(config)?;
    let oauth_client = build_oauth_client(config)?;
    let discord = DiscordApi::new(&config.discord_api_url, config.discord_bot_token.clone());
    let world_anvil = WorldAnvilClient::new(
        content.world_anvil.clone(),
        config.world_anvil_app_key.clone(),
        config.world_anvil_auth_token.clone(),
    );

    let cron = CronJobManager::with_default_jobs(JobContext {
        db: db.clone(),
        http_client: http_client.clone(),
        discord: discord.clone(),
    })
    .await?;

    Ok(AppState {
        app_url,
        db,
        http_client,
        content,
        oauth_client,
        discord,
        world_anvil,
        cron,
    })
}
