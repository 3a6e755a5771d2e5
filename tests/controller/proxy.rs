//! Tests for the content proxy.

use axum::{
    extract::{OriginalUri, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use crit_fumble::server::controller::proxy::proxy_content;
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Expect an SRD route to be fetched from the SRD API with the query forwarded
#[tokio::test]
async fn proxies_srd_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/spells")
                .match_query(Matcher::UrlEncoded("level".into(), "3".into()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({ "count": 1, "results": [{ "index": "fireball" }] }).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/system/dnd5e/api/spells?level=3");
    let result = proxy_content(State(state), OriginalUri(uri)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["results"][0]["index"], "fireball");
    test.assert_mocks();

    Ok(())
}

/// Expect a stored override to be merged into the 5eTools data response
#[tokio::test]
async fn applies_override_to_tools_data() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}spells/index.json", MOCK_TOOLS_DATA_PATH),
            200,
            json!({ "PHB": "spells-phb.json", "XGE": "spells-xge.json" }),
            1,
        )
        .build()
        .await?;
    test.content()
        .insert_override(
            "tools-data",
            "spells/index.json",
            json!({ "XGE": null, "HOMEBREW": "spells-homebrew.json" }),
        )
        .await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/play/dnd5e/data/spells/index.json");
    let result = proxy_content(State(state), OriginalUri(uri)).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(
        body,
        json!({ "PHB": "spells-phb.json", "HOMEBREW": "spells-homebrew.json" })
    );

    Ok(())
}

/// Expect an upstream 404 to be passed through as 404
#[tokio::test]
async fn upstream_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}bestiary/tarrasque.json", MOCK_TOOLS_PATH),
            404,
            json!({}),
            1,
        )
        .build()
        .await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/system/dnd5e/tool-api/bestiary/tarrasque.json");
    let result = proxy_content(State(state), OriginalUri(uri)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an upstream failure to be reported as 502
#[tokio::test]
async fn upstream_failure_is_bad_gateway() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_json_endpoint(
            "GET",
            format!("{}spells/fireball", MOCK_SRD_PATH),
            500,
            json!({ "error": "boom" }),
            1,
        )
        .build()
        .await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/system/dnd5e/api/spells/fireball");
    let result = proxy_content(State(state), OriginalUri(uri)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

/// Expect a path escaping the source's base URL to be rejected without an upstream call
#[tokio::test]
async fn rejects_path_escaping_source() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state = test.app_state().await;

    let uri = Uri::from_static("/play/dnd5e/data/../../discord/api/v10/users/@me");
    let result = proxy_content(State(state), OriginalUri(uri)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
