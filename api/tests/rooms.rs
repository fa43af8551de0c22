mod common;

use axum::http::StatusCode;
use common::ApiContext;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn duplicate_room_name_is_a_conflict(ctx: &mut ApiContext) {
    let first = ctx.server.post("/rooms").json(&json!({
        "name": "504",
        "additional": { "drive": "url1" }
    })).await;
    first.assert_status(StatusCode::CREATED);
    let room_id = first.json::<Value>()["data"]["id"].as_str().unwrap().to_string();

    let second = ctx.server.post("/rooms").json(&json!({ "name": "504" })).await;
    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        second.json::<Value>()["message"],
        "Room with name: '504' already exists in the database"
    );

    let original = ctx.server.get(&format!("/rooms/{room_id}")).await;
    original.assert_status_ok();
    assert_eq!(original.json::<Value>()["data"]["additional"]["drive"], "url1");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn created_room_reads_back_unchanged(ctx: &mut ApiContext) {
    let room_id = ctx
        .create("/rooms", json!({ "name": "Lab", "additional": { "calendar": "c1" } }))
        .await;

    let body = ctx.server.get(&format!("/rooms/{room_id}")).await.json::<Value>();
    assert_eq!(
        body["data"],
        json!({ "id": room_id, "name": "Lab", "additional": { "calendar": "c1" } })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn malformed_and_missing_ids(ctx: &mut ApiContext) {
    let response = ctx.server.get("/rooms/not-an-object-id").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "ObjectId is written in the wrong format"
    );

    let response = ctx.server.get("/rooms/5f8d0d55b54764421b7156c9").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Room: 5f8d0d55b54764421b7156c9 - not found in the database"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn room_equipment_by_name(ctx: &mut ApiContext) {
    ctx.create("/rooms", json!({ "name": "504" })).await;
    ctx.create(
        "/equipment",
        json!({ "name": "Cam1", "type": "ONVIF", "additional": { "room_id": "504" } }),
    )
    .await;
    ctx.create("/equipment", json!({ "name": "Mic1", "type": "Mic", "room_id": "505" }))
        .await;

    let response = ctx.server.get("/rooms/504/equipment").await;
    response.assert_status_ok();

    let names: Vec<String> = response.json::<Value>()["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Cam1"]);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn room_equipment_of_unknown_room(ctx: &mut ApiContext) {
    let response = ctx.server.get("/rooms/999/equipment").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "This room is not found");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn patch_merges_additional(ctx: &mut ApiContext) {
    let room_id = ctx
        .create("/rooms", json!({ "name": "504", "additional": { "drive": "url1" } }))
        .await;

    let response = ctx
        .server
        .patch(&format!("/rooms/{room_id}"))
        .json(&json!({ "additional": { "calendar": "c1" } }))
        .await;
    response.assert_status_ok();

    let data = &response.json::<Value>()["data"];
    assert_eq!(data["additional"], json!({ "drive": "url1", "calendar": "c1" }));
    assert_eq!(data["name"], "504");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn patch_rejects_empty_and_malformed_bodies(ctx: &mut ApiContext) {
    let room_id = ctx.create("/rooms", json!({ "name": "504" })).await;
    let path = format!("/rooms/{room_id}");

    let response = ctx.server.patch(&path).json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Please fill the request body");

    let response = ctx.server.patch(&path).json(&json!(["name"])).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx.server.patch(&path).json(&json!({ "id": "other" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn put_replaces_and_keeps_id(ctx: &mut ApiContext) {
    let room_id = ctx
        .create("/rooms", json!({ "name": "504", "additional": { "drive": "url1" } }))
        .await;
    ctx.create("/rooms", json!({ "name": "505" })).await;

    let response = ctx
        .server
        .put(&format!("/rooms/{room_id}"))
        .json(&json!({ "name": "504a" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"],
        json!({ "id": room_id, "name": "504a", "additional": {} })
    );

    let response = ctx
        .server
        .put(&format!("/rooms/{room_id}"))
        .json(&json!({ "name": "505" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let response = ctx
        .server
        .put("/rooms/5f8d0d55b54764421b7156c9")
        .json(&json!({ "name": "506" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn delete_returns_the_id(ctx: &mut ApiContext) {
    let room_id = ctx.create("/rooms", json!({ "name": "504" })).await;

    let response = ctx.server.delete(&format!("/rooms/{room_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], room_id);

    ctx.server
        .delete(&format!("/rooms/{room_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn create_validates_the_body(ctx: &mut ApiContext) {
    let response = ctx.server.post("/rooms").json(&json!({ "name": "" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/rooms")
        .json(&json!({ "name": "504", "floor": 5 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn pages_are_disjoint(ctx: &mut ApiContext) {
    for name in ["101", "102", "103", "104", "105"] {
        ctx.create("/rooms", json!({ "name": name })).await;
    }

    let names = |body: Value| -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|room| room["name"].as_str().unwrap().to_string())
            .collect()
    };

    let first = names(
        ctx.server
            .get("/rooms")
            .add_query_param("page_size", 2)
            .add_query_param("sort", "-name")
            .await
            .json::<Value>(),
    );
    let second = names(
        ctx.server
            .get("/rooms")
            .add_query_param("page_size", 2)
            .add_query_param("page_number", 1)
            .add_query_param("sort", "-name")
            .await
            .json::<Value>(),
    );

    assert_eq!(first, vec!["105", "104"]);
    assert_eq!(second, vec!["103", "102"]);

    let response = ctx.server.get("/rooms").add_query_param("page_size", "many").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
