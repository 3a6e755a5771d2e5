//! Tests for the admin endpoints.

use axum::{
    extract::{OriginalUri, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use crit_fumble::{
    model::{
        bot::ToggleCronJobDto,
        content::{ContentSourceKind, DeleteContentOverrideDto, UpsertContentOverrideDto},
    },
    server::{
        controller::{
            admin::{
                delete_content_override, get_cron_jobs, toggle_cron_job, upsert_content_override,
            },
            proxy::proxy_content,
        },
        data::content_override::ContentOverrideRepository,
        model::session::user::SessionUserId,
    },
};
use mockito::Matcher;
use serde_json::json;

use super::*;

static EVENT_REMINDER_JOB: &str = "HandleScheduledEvents";

fn goblin_override(path: &str, patch: serde_json::Value) -> UpsertContentOverrideDto {
    UpsertContentOverrideDto {
        source: ContentSourceKind::Tools,
        path: path.to_string(),
        patch,
    }
}

mod content_overrides {
    use super::*;

    /// Expect an upsert to replace the previous patch for the same resource
    #[tokio::test]
    async fn upsert_replaces_patch() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let first = goblin_override("/bestiary/goblin.json", json!({ "cr": "1" }));
        let result =
            upsert_content_override(State(state.clone()), test.session.clone(), Json(first)).await;
        assert!(result.is_ok());

        let second = goblin_override("bestiary/goblin.json", json!({ "cr": "2" }));
        let result = upsert_content_override(State(state), test.session, Json(second)).await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["source"], "tools");
        assert_eq!(body["path"], "bestiary/goblin.json");
        assert_eq!(body["patch"], json!({ "cr": "2" }));

        let stored = ContentOverrideRepository::new(&test.db)
            .get_for_resource(ContentSourceKind::Tools, "bestiary/goblin.json")
            .await?;
        assert_eq!(stored.len(), 1);

        Ok(())
    }

    /// Expect 400 for an empty path
    #[tokio::test]
    async fn upsert_requires_path() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let result = upsert_content_override(
            State(state),
            test.session,
            Json(goblin_override("/", json!({}))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 403 for a signed in user who is not an admin
    #[tokio::test]
    async fn upsert_requires_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let user = test.user().insert_user("1").await?;
        SessionUserId::insert(&test.session, &user.id).await.unwrap();
        let state = test.app_state().await;

        let result = upsert_content_override(
            State(state),
            test.session,
            Json(goblin_override("bestiary/goblin.json", json!({ "cr": "9" }))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect an override on a path with a space to apply to the percent-encoded proxy route
    #[tokio::test]
    async fn upsert_applies_to_encoded_route() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_app_tables()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", Matcher::Regex(r"/spells/fire(%20| )bolt\.json$".to_string()))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(json!({ "name": "Fire Bolt", "level": 0 }).to_string())
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let upsert = UpsertContentOverrideDto {
            source: ContentSourceKind::ToolsData,
            path: "./spells/fire bolt.json".to_string(),
            patch: json!({ "level": 9 }),
        };
        let result = upsert_content_override(State(state.clone()), test.session.clone(), Json(upsert)).await;
        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["path"], "spells/fire%20bolt.json");

        let uri = Uri::from_static("/play/dnd5e/data/spells/fire%20bolt.json");
        let result = proxy_content(State(state), OriginalUri(uri)).await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body, json!({ "name": "Fire Bolt", "level": 9 }));
        test.assert_mocks();

        Ok(())
    }

    /// Expect 400 for a path that climbs out of the content source
    #[tokio::test]
    async fn upsert_rejects_escaping_path() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let result = upsert_content_override(
            State(state),
            test.session,
            Json(goblin_override("../../secrets.json", json!({}))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 204 when deleting an override and 404 once it is gone
    #[tokio::test]
    async fn delete_removes_override() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        test.content()
            .insert_override("tools", "bestiary/goblin.json", json!({ "cr": "1" }))
            .await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let body = || DeleteContentOverrideDto {
            source: ContentSourceKind::Tools,
            path: "bestiary/goblin.json".to_string(),
        };

        let result =
            delete_content_override(State(state.clone()), test.session.clone(), Json(body())).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

        let result = delete_content_override(State(state), test.session, Json(body())).await;
        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod cron_jobs {
    use super::*;

    /// Expect the event reminder job to be listed and stopped until started
    #[tokio::test]
    async fn lists_registered_jobs() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let result = get_cron_jobs(State(state), test.session).await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body[0]["name"], EVENT_REMINDER_JOB);
        assert_eq!(body[0]["schedule"], "0 */30 * * * *");
        assert_eq!(body[0]["running"], false);

        Ok(())
    }

    /// Expect toggling to start and then stop the job
    #[tokio::test]
    async fn toggles_job() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let toggle = |enabled| ToggleCronJobDto {
            name: EVENT_REMINDER_JOB.to_string(),
            enabled,
        };

        let result =
            toggle_cron_job(State(state.clone()), test.session.clone(), Json(toggle(true))).await;
        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["running"], true);
        assert_eq!(state.cron.running_jobs().await, vec![EVENT_REMINDER_JOB]);

        let result =
            toggle_cron_job(State(state.clone()), test.session, Json(toggle(false))).await;
        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["running"], false);
        assert!(state.cron.running_jobs().await.is_empty());

        Ok(())
    }

    /// Expect 404 for a job that is not registered
    #[tokio::test]
    async fn unknown_job_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_app_tables().build().await?;
        let admin = test.user().insert_admin("1").await?;
        SessionUserId::insert(&test.session, &admin.id).await.unwrap();
        let state = test.app_state().await;

        let toggle = ToggleCronJobDto {
            name: "Nope".to_string(),
            enabled: true,
        };
        let result = toggle_cron_job(State(state), test.session, Json(toggle)).await;

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

        let result = get_cron_jobs(State(state), test.session).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
