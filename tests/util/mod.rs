//! Helpers shared by the controller integration tests.

use axum::{
    body::to_bytes,
    http::{header::LOCATION, StatusCode},
    response::Response,
};
use crit_fumble::server::{config::Config, model::app::AppState, startup::build_app_state};
use crit_fumble_test_utils::prelude::*;
use serde_json::Value;

/// Extension trait for [`TestContext`] to build an [`AppState`] whose upstreams are the mock server
#[allow(async_fn_in_trait)]
pub trait TestContextExt {
    async fn app_state(&self) -> AppState;

    async fn app_state_with_bot(&self, bot_token: Option<&str>) -> AppState;
}

impl TestContextExt for TestContext {
    async fn app_state(&self) -> AppState {
        self.app_state_with_bot(Some(TEST_DISCORD_BOT_TOKEN)).await
    }

    async fn app_state_with_bot(&self, bot_token: Option<&str>) -> AppState {
        let url = self.server_url();
        let vars = [
            ("APP_URL", TEST_APP_URL.to_string()),
            ("DATABASE_URL", "sqlite::memory:".to_string()),
            ("VALKEY_URL", "redis://127.0.0.1:6379".to_string()),
            ("DISCORD_CLIENT_ID", TEST_DISCORD_CLIENT_ID.to_string()),
            ("DISCORD_CLIENT_SECRET", TEST_DISCORD_CLIENT_SECRET.to_string()),
            ("DISCORD_API_URL", format!("{}{}", url, MOCK_DISCORD_API_PATH)),
            ("DISCORD_AUTH_URL", format!("{}{}", url, MOCK_DISCORD_AUTH_PATH)),
            ("DISCORD_TOKEN_URL", format!("{}{}", url, MOCK_DISCORD_TOKEN_PATH)),
            ("SRD_API_URL", format!("{}{}", url, MOCK_SRD_PATH)),
            ("FIVE_E_TOOLS_URL", format!("{}{}", url, MOCK_TOOLS_PATH)),
            ("FIVE_E_TOOLS_DATA_URL", format!("{}{}", url, MOCK_TOOLS_DATA_PATH)),
            ("WORLD_ANVIL_API_URL", format!("{}{}", url, MOCK_WORLD_ANVIL_PATH)),
            ("WORLD_ANVIL_APP_KEY", TEST_WORLD_ANVIL_APP_KEY.to_string()),
            ("WORLD_ANVIL_AUTH_TOKEN", TEST_WORLD_ANVIL_AUTH_TOKEN.to_string()),
            ("USER_AGENT", TEST_USER_AGENT.to_string()),
        ];

        let mut config = Config::from_vars(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
        })
        .expect("Failed to build test configuration");
        config.discord_bot_token = bot_token.map(str::to_string);

        build_app_state(&config, self.db.clone())
            .await
            .expect("Failed to build test app state")
    }
}

/// Reads a response body as JSON
pub async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

/// Asserts `resp` is a 307 and returns its `Location`
pub fn redirect_location(resp: &Response) -> String {
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("Redirect without a location")
        .to_string()
}
