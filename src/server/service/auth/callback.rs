//! Discord OAuth callback: code exchange, identity lookup and user sign in.

use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::is_user,
    server::{
        error::{auth::AuthError, Error},
        model::auth::{DiscordOAuthClient, DiscordUser},
        service::{discord::DiscordApi, user::UserService},
    },
};

/// Completes a Discord sign in from the OAuth callback
pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a DiscordOAuthClient,
    discord: &'a DiscordApi,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a DiscordOAuthClient,
        discord: &'a DiscordApi,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord,
        }
    }

    /// Exchanges the authorization code and signs in the Discord user it belongs to.
    ///
    /// # Returns
    /// - `Ok(Model)`: The signed in user, created on first sign in and reactivated if needed
    /// - `Err(AuthError::TokenExchangeFailed)`: Discord rejected the code
    /// - `Err(AuthError::InvalidIdentity)`: The profile has no string `id`
    /// - `Err(Error)`: Profile request or database failure
    pub async fn handle_callback(&self, code: &str) -> Result<entity::user::Model, Error> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let profile = self
            .discord
            .current_user(self.http_client, token.access_token().secret())
            .await?;

        if !is_user(&profile) {
            return Err(AuthError::InvalidIdentity("Discord").into());
        }

        let discord_user: DiscordUser = serde_json::from_value(profile)?;

        UserService::new(self.db)
            .get_or_create_user(discord_user.into_identity())
            .await
    }
}
