//! Discord OAuth client type and the identities returned by Discord and World Anvil.

use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};
use serde::Deserialize;

use crate::server::data::user::UserIdentity;

/// Discord OAuth2 client with the authorize and token endpoints configured
pub type DiscordOAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// URL to send the user to and the CSRF state it carries
pub struct AuthorizationRequest {
    /// Discord authorize URL
    pub url: String,
    /// CSRF state embedded in `url`
    pub state: String,
}

/// Subset of Discord's `/users/@me` response
#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    /// Discord snowflake id
    pub id: String,
    /// Unique account name
    pub username: String,
    /// Display name, preferred over `username`
    pub global_name: Option<String>,
    /// Avatar hash
    pub avatar: Option<String>,
    /// Email, present with the `email` scope
    pub email: Option<String>,
}

impl DiscordUser {
    /// Converts the profile into the fields stored on a user, building the avatar CDN URL
    pub fn into_identity(self) -> UserIdentity {
        let image = self
            .avatar
            .as_ref()
            .map(|avatar| format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, avatar));

        UserIdentity {
            name: Some(self.global_name.unwrap_or(self.username)),
            discord_id: self.id,
            email: self.email,
            image,
        }
    }
}

/// Subset of World Anvil's `/identity` response
#[derive(Debug, Deserialize)]
pub struct WorldAnvilIdentity {
    /// World Anvil user id
    pub id: String,
    /// World Anvil username
    pub username: Option<String>,
}
