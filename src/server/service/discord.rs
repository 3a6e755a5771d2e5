//! Discord REST API calls made with a user's OAuth token or the bot token.

use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::server::error::Error;

/// Discord REST API client
#[derive(Clone, Debug)]
pub struct DiscordApi {
    api_url: String,
    bot_token: Option<String>,
}

impl DiscordApi {
    /// Creates a client for `api_url`, `bot_token` is needed to post messages
    pub fn new(api_url: &str, bot_token: Option<String>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token,
        }
    }

    /// Whether a bot token is configured
    pub fn has_bot_token(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Fetches the profile of the user the access token belongs to
    pub async fn current_user(
        &self,
        http_client: &reqwest::Client,
        access_token: &str,
    ) -> Result<Value, Error> {
        let profile = http_client
            .get(format!("{}/users/@me", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(profile)
    }

    /// Posts a message to a channel as the bot
    pub async fn create_message(
        &self,
        http_client: &reqwest::Client,
        channel_id: &str,
        message: &Value,
    ) -> Result<(), Error> {
        let Some(bot_token) = &self.bot_token else {
            return Err(Error::InternalError(
                "Discord bot token is not configured".to_string(),
            ));
        };

        http_client
            .post(format!("{}/channels/{}/messages", self.api_url, channel_id))
            .header(AUTHORIZATION, format!("Bot {}", bot_token))
            .json(message)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
