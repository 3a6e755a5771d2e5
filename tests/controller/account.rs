//! Tests for linking and unlinking a World Anvil account.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crit_fumble::server::{
    controller::account::{link_world_anvil, unlink_world_anvil},
    data::user::UserRepository,
    model::session::user::SessionUserId,
};
use mockito::Matcher;
use serde_json::json;

use super::*;

static USER_TOKEN: &str = "user-world-anvil-token";

/// Expect the identity to be verified with the user's token and stored on the account
#[tokio::test]
async fn links_account() -> Result<(), TestError> {
    let identity_path = format!("{}identity", MOCK_WORLD_ANVIL_PATH);
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", identity_path.as_str())
                .match_header("x-auth-token", USER_TOKEN)
                .match_header("x-application-key", TEST_WORLD_ANVIL_APP_KEY)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({ "id": "wa-1", "username": "percival" }).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = link_world_anvil(
        State(state),
        test.session.clone(),
        Json(json!({ "token": format!("  {}  ", USER_TOKEN) })),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["world_anvil_username"], "percival");
    // The token itself is never echoed back
    assert!(body.get("world_anvil_token").is_none());

    let stored = UserRepository::new(&test.db).get(&user.id).await?.unwrap();
    assert_eq!(stored.world_anvil_id.as_deref(), Some("wa-1"));
    assert_eq!(stored.world_anvil_token.as_deref(), Some(USER_TOKEN));
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a token too short to be real, without calling World Anvil
#[tokio::test]
async fn rejects_short_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = link_world_anvil(State(state), test.session, Json(json!({ "token": "abc" }))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when World Anvil returns an identity without a string id
#[tokio::test]
async fn rejects_invalid_identity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}identity", MOCK_WORLD_ANVIL_PATH),
            200,
            json!({ "success": false }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = link_world_anvil(
        State(state),
        test.session,
        Json(json!({ "token": USER_TOKEN })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let stored = UserRepository::new(&test.db).get(&user.id).await?.unwrap();
    assert!(stored.world_anvil_token.is_none());

    Ok(())
}

/// Expect a token World Anvil rejects to be a client error, nothing stored
#[tokio::test]
async fn rejected_token_is_bad_request() -> Result<(), TestError> {
    for status in [401, 403] {
        let identity_path = format!("{}identity", MOCK_WORLD_ANVIL_PATH);
        let test = TestBuilder::new()
            .with_app_tables()
            .with_mock_endpoint(move |server| {
                server
                    .mock("GET", identity_path.as_str())
                    .match_query(Matcher::Any)
                    .with_status(status)
                    .create()
            })
            .build()
            .await?;
        let user = test.user().insert_user("1").await?;
        SessionUserId::insert(&test.session, &user.id).await.unwrap();
        let state = test.app_state().await;

        let result = link_world_anvil(
            State(state),
            test.session,
            Json(json!({ "token": USER_TOKEN })),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let stored = UserRepository::new(&test.db).get(&user.id).await?.unwrap();
        assert!(stored.world_anvil_token.is_none());
    }

    Ok(())
}

/// Expect World Anvil being down to surface as an upstream failure
#[tokio::test]
async fn upstream_outage_is_bad_gateway() -> Result<(), TestError> {
    let identity_path = format!("{}identity", MOCK_WORLD_ANVIL_PATH);
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", identity_path.as_str())
                .match_query(Matcher::Any)
                .with_status(503)
                .create()
        })
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = link_world_anvil(
        State(state),
        test.session,
        Json(json!({ "token": USER_TOKEN })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

/// Expect unlinking to clear the stored World Anvil account
#[tokio::test]
async fn unlinks_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    UserRepository::new(&test.db)
        .link_world_anvil(
            &user.id,
            "wa-1".to_string(),
            Some("percival".to_string()),
            USER_TOKEN.to_string(),
        )
        .await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = unlink_world_anvil(State(state), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["world_anvil_username"].is_null());

    let stored = UserRepository::new(&test.db).get(&user.id).await?.unwrap();
    assert!(stored.world_anvil_id.is_none());
    assert!(stored.world_anvil_username.is_none());
    assert!(stored.world_anvil_token.is_none());

    Ok(())
}

/// Expect 401 when unlinking without a signed in user
#[tokio::test]
async fn unlink_requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let result = unlink_world_anvil(State(state), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
