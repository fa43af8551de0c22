mod common;

use common::ApiContext;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn welcome_message(ctx: &mut ApiContext) {
    let response = ctx.server.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Welcome to Erudite!" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_reports_store_latency(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["data"].is_u64());
}

#[tokio::test]
async fn routes_live_under_the_root_path() {
    let ctx = ApiContext::with_args(&["--server-root-path", "/api/erudite"]).await;

    ctx.server
        .get("/api/erudite")
        .await
        .assert_json(&json!({ "message": "Welcome to Erudite!" }));
    ctx.server.get("/api/erudite/rooms").await.assert_status_ok();
    ctx.server.get("/rooms").await.assert_status_not_found();
}
