//! Tests for the Discord sign in, callback and logout endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use crit_fumble::server::{
    controller::auth::{callback, logout, signin, CallbackParams, SignInParams},
    data::user::UserRepository,
    model::session::{
        auth::{SessionAuthCsrf, SessionAuthRedirect},
        user::SessionUserId,
    },
};
use serde_json::json;

use super::*;

fn discord_endpoints(builder: TestBuilder) -> TestBuilder {
    builder
        .with_json_endpoint(
            "POST",
            MOCK_DISCORD_TOKEN_PATH,
            200,
            json!({
                "access_token": "access_token",
                "token_type": "Bearer",
                "expires_in": 604800,
                "scope": "identify email"
            }),
            1,
        )
        .with_json_endpoint(
            "GET",
            format!("{}/users/@me", MOCK_DISCORD_API_PATH),
            200,
            json!({ "id": "80351110224678912", "username": "vex", "global_name": "Vex'ahlia" }),
            1,
        )
}

/// Expect a redirect to Discord with the requested callback kept in session
#[tokio::test]
async fn signin_redirects_to_discord() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let params = SignInParams {
        callback_url: Some("/character/grog?tab=sheet".to_string()),
    };
    let result = signin(State(state), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let location = redirect_location(&result.unwrap().into_response());
    assert!(location.starts_with(&format!("{}{}", test.server_url(), MOCK_DISCORD_AUTH_PATH)));
    assert!(location.contains("scope=identify+email"));

    let redirect = SessionAuthRedirect::remove(&test.session).await.unwrap();
    assert_eq!(redirect.as_deref(), Some("/character/grog?tab=sheet"));
    assert!(SessionAuthCsrf::remove(&test.session).await.is_ok());

    Ok(())
}

/// Expect a callback pointing at another site to be replaced with the dashboard
#[tokio::test]
async fn signin_ignores_offsite_callback() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let params = SignInParams {
        callback_url: Some("https://evil.example/steal".to_string()),
    };
    let result = signin(State(state), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let redirect = SessionAuthRedirect::remove(&test.session).await.unwrap();
    assert_eq!(redirect.as_deref(), Some("/dashboard"));

    Ok(())
}

/// Expect a callback hiding a second slash behind a tab or newline to be replaced
#[tokio::test]
async fn signin_ignores_callback_with_control_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    for callback_url in ["/\t/evil.example", "/\n/evil.example"] {
        let state = test.app_state().await;
        let params = SignInParams {
            callback_url: Some(callback_url.to_string()),
        };
        let result = signin(State(state), test.session.clone(), Query(params)).await;

        assert!(result.is_ok());
        let redirect = SessionAuthRedirect::remove(&test.session).await.unwrap();
        assert_eq!(redirect.as_deref(), Some("/dashboard"));
    }

    Ok(())
}

/// Expect the callback to create the user, sign them in and return to the stored callback
#[tokio::test]
async fn callback_signs_in_user() -> Result<(), TestError> {
    let test = discord_endpoints(TestBuilder::new().with_app_tables())
        .build()
        .await?;
    let state = test.app_state().await;

    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();
    SessionAuthRedirect::insert(&test.session, "/character/grog")
        .await
        .unwrap();

    let params = CallbackParams {
        state: "state".to_string(),
        code: "code".to_string(),
    };
    let result = callback(State(state), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let location = redirect_location(&result.unwrap().into_response());
    assert_eq!(location, "/character/grog");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_some());
    let user = UserRepository::new(&test.db)
        .get_by_discord_id("80351110224678912")
        .await?;
    assert_eq!(user.map(|user| user.id), user_id);
    test.assert_mocks();

    Ok(())
}

/// Expect the dashboard when no callback was stored
#[tokio::test]
async fn callback_defaults_to_dashboard() -> Result<(), TestError> {
    let test = discord_endpoints(TestBuilder::new().with_app_tables())
        .build()
        .await?;
    let state = test.app_state().await;

    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let params = CallbackParams {
        state: "state".to_string(),
        code: "code".to_string(),
    };
    let result = callback(State(state), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let location = redirect_location(&result.unwrap().into_response());
    assert_eq!(location, "/dashboard");

    Ok(())
}

/// Expect 400 without calling Discord when the CSRF state does not match
#[tokio::test]
async fn callback_rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let params = CallbackParams {
        state: "forged".to_string(),
        code: "code".to_string(),
    };
    let result = callback(State(state), test.session.clone(), Query(params)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect logout to clear the user and redirect home
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let location = redirect_location(&result.unwrap().into_response());
    assert_eq!(location, "/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect logout without a signed in user to still redirect
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::TEMPORARY_REDIRECT
    );

    Ok(())
}
