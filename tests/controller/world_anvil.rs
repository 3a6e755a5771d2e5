//! Tests for the World Anvil pass-through endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use crit_fumble::server::{
    controller::world_anvil::{get_block, get_blocks, get_world},
    model::session::user::SessionUserId,
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Expect the world to be fetched with the application token and its override applied
#[tokio::test]
async fn get_world_applies_override() -> Result<(), TestError> {
    let world_path = format!("{}world", MOCK_WORLD_ANVIL_PATH);
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", world_path.as_str())
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("id".into(), "exandria".into()),
                    Matcher::UrlEncoded("granularity".into(), "-1".into()),
                ]))
                .match_header("x-auth-token", TEST_WORLD_ANVIL_AUTH_TOKEN)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({ "id": "exandria", "title": "Exandria" }).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    test.content()
        .insert_override("world-anvil", "world/exandria", json!({ "title": "Exandria Unlimited" }))
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = get_world(State(state), test.session.clone(), Path("exandria".to_string())).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["title"], "Exandria Unlimited");
    test.assert_mocks();

    Ok(())
}

/// Expect blocks of a folder to be requested with POST
#[tokio::test]
async fn get_blocks_posts_folder_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "POST",
            format!("{}blockfolder/blocks", MOCK_WORLD_ANVIL_PATH),
            200,
            json!({ "entities": [{ "id": "owlbear" }] }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = get_blocks(State(state), test.session.clone(), Path("bestiary".to_string())).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["entities"][0]["id"], "owlbear");
    test.assert_mocks();

    Ok(())
}

/// Expect a missing block to be reported as 404
#[tokio::test]
async fn get_block_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}block", MOCK_WORLD_ANVIL_PATH),
            404,
            json!({ "error": "not found" }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = get_block(State(state), test.session, Path("missing".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without a signed in user
#[tokio::test]
async fn requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let result = get_world(State(state), test.session, Path("exandria".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
