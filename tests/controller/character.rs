//! Tests for the character endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crit_fumble::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::{
        controller::character::{
            create_character, delete_character, get_characters, update_character,
        },
        model::session::user::SessionUserId,
    },
};
use serde_json::json;

use super::*;

/// Expect 201 with the created character, slugged from its name
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let character = CreateCharacterDto {
        name: Some("Grog Strongjaw".to_string()),
        sheet: Some(json!({ "strength": 20 })),
        ..Default::default()
    };
    let result = create_character(State(state), test.session, Json(character)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["slug"], "grog-strongjaw");
    assert_eq!(body["game_system"], "dnd5e");
    assert_eq!(body["sheet"]["strength"], 20);
    assert_eq!(body["user_id"], json!(user.id));

    Ok(())
}

/// Expect 400 when the name is missing
#[tokio::test]
async fn create_requires_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = create_character(
        State(state),
        test.session,
        Json(CreateCharacterDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 without a signed in user
#[tokio::test]
async fn create_requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let character = CreateCharacterDto {
        name: Some("Grog".to_string()),
        ..Default::default()
    };
    let result = create_character(State(state), test.session, Json(character)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect only the signed in user's characters
#[tokio::test]
async fn lists_own_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    let other = test.user().insert_user("2").await?;
    test.character().insert_character(&user.id, "Grog").await?;
    test.character().insert_character(&other.id, "Pike").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let result = get_characters(State(state), test.session).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["name"], "Grog");

    Ok(())
}

/// Expect the owner to be able to update their character
#[tokio::test]
async fn owner_can_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("1").await?;
    let character = test.character().insert_character(&user.id, "Grog").await?;
    SessionUserId::insert(&test.session, &user.id).await.unwrap();
    let state = test.app_state().await;

    let update = UpdateCharacterDto {
        title: Some("Grand Poobah".to_string()),
        ..Default::default()
    };
    let result = update_character(
        State(state),
        test.session,
        Path(character.id),
        Json(update),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["title"], "Grand Poobah");
    assert_eq!(body["name"], "Grog");

    Ok(())
}

/// Expect 403 when another user updates the character
#[tokio::test]
async fn other_user_cannot_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let owner = test.user().insert_user("1").await?;
    let other = test.user().insert_user("2").await?;
    let character = test.character().insert_character(&owner.id, "Grog").await?;
    SessionUserId::insert(&test.session, &other.id).await.unwrap();
    let state = test.app_state().await;

    let update = UpdateCharacterDto {
        name: Some("Stolen".to_string()),
        ..Default::default()
    };
    let result = update_character(
        State(state),
        test.session,
        Path(character.id),
        Json(update),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect an admin to be able to delete another user's character
#[tokio::test]
async fn admin_can_delete() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let owner = test.user().insert_user("1").await?;
    let admin = test.user().insert_admin("2").await?;
    let character = test.character().insert_character(&owner.id, "Grog").await?;
    SessionUserId::insert(&test.session, &admin.id).await.unwrap();
    let state = test.app_state().await;

    let result = delete_character(
        State(state.clone()),
        test.session.clone(),
        Path(character.id.clone()),
    )
    .await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["id"], json!(character.id));

    // A second delete no longer finds it
    let result = delete_character(State(state), test.session, Path(character.id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
