//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use reqwest::Url;

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is unset
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Discord REST API base URL
pub static DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
/// Discord OAuth authorize endpoint
pub static DEFAULT_DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
/// Discord OAuth token endpoint
pub static DEFAULT_DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
/// D&D 5e SRD API base URL
pub static DEFAULT_SRD_API_URL: &str = "https://www.dnd5eapi.co/api/";
/// 5eTools site base URL
pub static DEFAULT_FIVE_E_TOOLS_URL: &str = "https://2014.5e.tools/";
/// 5eTools JSON data base URL
pub static DEFAULT_FIVE_E_TOOLS_DATA_URL: &str = "https://2014.5e.tools/data/";
/// World Anvil Boromir API base URL
pub static DEFAULT_WORLD_ANVIL_API_URL: &str = "https://www.worldanvil.com/api/external/boromir/";

/// Runtime configuration read from environment variables.
pub struct Config {
    /// Public base URL, used to build the OAuth redirect URL
    pub app_url: String,
    /// Socket address the HTTP server binds to
    pub bind_address: SocketAddr,
    /// Database connection string
    pub database_url: String,
    /// Valkey/Redis URL of the session store
    pub valkey_url: String,
    /// Discord OAuth application id
    pub discord_client_id: String,
    /// Discord OAuth application secret
    pub discord_client_secret: String,
    /// Bot token used by cron jobs posting to Discord, jobs no-op without it
    pub discord_bot_token: Option<String>,
    /// Discord REST API base URL
    pub discord_api_url: String,
    /// Discord OAuth authorize endpoint
    pub discord_auth_url: String,
    /// Discord OAuth token endpoint
    pub discord_token_url: String,
    /// Upstream of the SRD proxy
    pub srd_api_url: String,
    /// Upstream of the 5eTools proxy
    pub five_e_tools_url: String,
    /// Upstream of the 5eTools data proxy
    pub five_e_tools_data_url: String,
    /// World Anvil API base URL
    pub world_anvil_api_url: String,
    /// Sent as `x-application-key` when set
    pub world_anvil_app_key: Option<String>,
    /// Application-wide `x-auth-token`, used when the user has not linked an account
    pub world_anvil_auth_token: Option<String>,
    /// User agent sent with every upstream request
    pub user_agent: String,
}

impl Config {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, blank values count as unset
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));
        let url = |name: &str, default: &str| -> Result<String, ConfigError> {
            let value = optional(name).unwrap_or_else(|| default.to_string());
            Url::parse(&value).map_err(|e| ConfigError::invalid(name, e))?;

            Ok(value)
        };

        let app_url = required("APP_URL")?;
        Url::parse(&app_url).map_err(|e| ConfigError::invalid("APP_URL", e))?;

        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDRESS", e))?;

        Ok(Self {
            app_url,
            bind_address,
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_bot_token: optional("DISCORD_BOT_TOKEN"),
            discord_api_url: url("DISCORD_API_URL", DEFAULT_DISCORD_API_URL)?,
            discord_auth_url: url("DISCORD_AUTH_URL", DEFAULT_DISCORD_AUTH_URL)?,
            discord_token_url: url("DISCORD_TOKEN_URL", DEFAULT_DISCORD_TOKEN_URL)?,
            srd_api_url: url("SRD_API_URL", DEFAULT_SRD_API_URL)?,
            five_e_tools_url: url("FIVE_E_TOOLS_URL", DEFAULT_FIVE_E_TOOLS_URL)?,
            five_e_tools_data_url: url("FIVE_E_TOOLS_DATA_URL", DEFAULT_FIVE_E_TOOLS_DATA_URL)?,
            world_anvil_api_url: url("WORLD_ANVIL_API_URL", DEFAULT_WORLD_ANVIL_API_URL)?,
            world_anvil_app_key: optional("WORLD_ANVIL_APP_KEY"),
            world_anvil_auth_token: optional("WORLD_ANVIL_AUTH_TOKEN"),
            user_agent: optional("USER_AGENT")
                .unwrap_or_else(|| format!("CritFumble/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}
