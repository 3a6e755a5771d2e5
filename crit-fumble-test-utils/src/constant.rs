pub static TEST_APP_URL: &str = "http://localhost:8080";
pub static TEST_USER_AGENT: &str = "CritFumble/test (test@example.com)";
pub static TEST_DISCORD_CLIENT_ID: &str = "discord_client_id";
pub static TEST_DISCORD_CLIENT_SECRET: &str = "discord_client_secret";
pub static TEST_DISCORD_BOT_TOKEN: &str = "discord_bot_token";
pub static TEST_WORLD_ANVIL_APP_KEY: &str = "world_anvil_app_key";
pub static TEST_WORLD_ANVIL_AUTH_TOKEN: &str = "world_anvil_auth_token";

/// Path prefixes the upstream APIs are mounted under on the mock server
pub static MOCK_DISCORD_API_PATH: &str = "/discord/api/v10";
pub static MOCK_DISCORD_AUTH_PATH: &str = "/discord/oauth2/authorize";
pub static MOCK_DISCORD_TOKEN_PATH: &str = "/discord/api/oauth2/token";
/// Mounted at `/api/` so the host-absolute links returned by the SRD API resolve on the mock
pub static MOCK_SRD_PATH: &str = "/api/";
pub static MOCK_TOOLS_PATH: &str = "/tools/";
pub static MOCK_TOOLS_DATA_PATH: &str = "/tools/data/";
pub static MOCK_WORLD_ANVIL_PATH: &str = "/worldanvil/boromir/";
