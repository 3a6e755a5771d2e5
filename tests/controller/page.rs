//! Tests for the page props endpoints.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use crit_fumble::server::{
    controller::page::{character_page, dashboard, world_page},
    model::session::user::SessionUserId,
};
use serde_json::json;

use super::*;

/// Expect an anonymous visitor to be sent to sign in with the page as callback
#[tokio::test]
async fn redirects_to_sign_in_with_callback() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/character/grog?tab=sheet");
    let result = character_page(
        State(state),
        test.session,
        OriginalUri(uri),
        Path("grog".to_string()),
    )
    .await;

    assert!(result.is_err());
    let location = redirect_location(&result.err().unwrap().into_response());
    assert_eq!(
        location,
        "/api/auth/signin?callbackUrl=%2Fcharacter%2Fgrog%3Ftab%3Dsheet"
    );

    Ok(())
}

/// Expect a deactivated user to be sent to sign in and signed out
#[tokio::test]
async fn redirects_deactivated_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_deactivated_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = dashboard(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/dashboard")),
    )
    .await;

    assert!(result.is_err());
    let location = redirect_location(&result.err().unwrap().into_response());
    assert_eq!(location, "/api/auth/signin?callbackUrl=%2Fdashboard");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect the dashboard to list only the signed in user's characters and campaigns
#[tokio::test]
async fn dashboard_lists_user_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    let other = test.user().insert_user("2").await?;
    test.character().insert_character(&user.id, "Grog").await?;
    test.character().insert_character(&other.id, "Pike").await?;
    test.campaign()
        .insert_campaign(&user.id, "Vox Machina", None)
        .await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = dashboard(
        State(state),
        test.session,
        OriginalUri(Uri::from_static("/dashboard")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user"]["id"], json!(user.id));
    assert_eq!(body["characters"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["characters"][0]["name"], "Grog");
    assert_eq!(body["campaigns"][0]["name"], "Vox Machina");

    Ok(())
}

/// Expect the character page to include the world of the character's campaign
#[tokio::test]
async fn character_page_includes_world() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}world", MOCK_WORLD_ANVIL_PATH),
            200,
            json!({ "id": "exandria", "title": "Exandria" }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    let character = test.character().insert_character(&user.id, "Grog").await?;
    let campaign = test
        .campaign()
        .insert_campaign(&user.id, "Vox Machina", Some("exandria"))
        .await?;
    let party = test.party().insert_party("Vox Machina").await?;
    test.party().add_character(&party.id, &character.id).await?;
    test.party().add_campaign(&party.id, &campaign.id).await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = character_page(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/character/grog")),
        Path("grog".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["character"]["slug"], "grog");
    assert_eq!(body["parties"][0]["name"], "Vox Machina");
    assert_eq!(body["world"]["title"], "Exandria");
    test.assert_mocks();

    Ok(())
}

/// Expect a World Anvil failure to leave the world empty instead of failing the page
#[tokio::test]
async fn character_page_tolerates_world_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}world", MOCK_WORLD_ANVIL_PATH),
            503,
            json!({ "error": "maintenance" }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    let character = test.character().insert_character(&user.id, "Grog").await?;
    let campaign = test
        .campaign()
        .insert_campaign(&user.id, "Vox Machina", Some("exandria"))
        .await?;
    let party = test.party().insert_party("Vox Machina").await?;
    test.party().add_character(&party.id, &character.id).await?;
    test.party().add_campaign(&party.id, &campaign.id).await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = character_page(
        State(state),
        test.session,
        OriginalUri(Uri::from_static("/character/grog")),
        Path("grog".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert!(body["world"].is_null());

    Ok(())
}

/// Expect 404 for an unknown character slug
#[tokio::test]
async fn character_page_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = character_page(
        State(state),
        test.session,
        OriginalUri(Uri::from_static("/character/nobody")),
        Path("nobody".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the world page to combine the world and its block folders
#[tokio::test]
async fn world_page_fetches_world_and_folders() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}world", MOCK_WORLD_ANVIL_PATH),
            200,
            json!({ "id": "exandria", "title": "Exandria" }),
            1,
        )
        .with_json_endpoint(
            "POST",
            format!("{}world/blockfolders", MOCK_WORLD_ANVIL_PATH),
            200,
            json!({ "entities": [{ "id": "bestiary" }] }),
            1,
        )
        .build()
        .await?;
    let user = test.user().insert_user("1").await?;
    test.campaign()
        .insert_campaign(&user.id, "Vox Machina", Some("exandria"))
        .await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = world_page(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/world/vox-machina")),
        Path("vox-machina".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["campaign"]["slug"], "vox-machina");
    assert_eq!(body["world"]["title"], "Exandria");
    assert_eq!(body["block_folders"]["entities"][0]["id"], "bestiary");
    test.assert_mocks();

    Ok(())
}

/// Expect 404 when the campaign has no World Anvil world
#[tokio::test]
async fn world_page_requires_linked_world() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    test.campaign()
        .insert_campaign(&user.id, "Vox Machina", None)
        .await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = world_page(
        State(state),
        test.session,
        OriginalUri(Uri::from_static("/world/vox-machina")),
        Path("vox-machina".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
