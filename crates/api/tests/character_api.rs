//! HTTP-level integration tests for `/api/v1/characters`.
//!
//! Requests go straight to the router via `tower::ServiceExt`. Films and
//! starships are created over HTTP first so each test reads end to end.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create(app: &Router, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_character(pool: PgPool) {
    let app = build_test_app(pool);
    let f1 = create(&app, "/api/v1/films", json!({"title": "A New Hope", "episode_id": 4})).await;
    let f2 = create(&app, "/api/v1/films", json!({"title": "Return of the Jedi"})).await;
    let s1 = create(&app, "/api/v1/starships", json!({"name": "X-wing"})).await;

    let response = post_json(
        app.clone(),
        "/api/v1/characters",
        json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "film_ids": [f1, f2],
            "starship_ids": [s1],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Luke Skywalker");
    assert_eq!(created["films"].as_array().unwrap().len(), 2);
    assert_eq!(created["starships"][0]["name"], "X-wing");

    let id = created["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/v1/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["height"], "172");
    assert_eq!(fetched["films"][0]["episodeId"], 4);
    assert_eq!(fetched["films"][1]["title"], "Return of the Jedi");
    assert_eq!(fetched["starships"][0]["id"], s1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_character_without_relationships(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/characters", json!({"name": "Wedge Antilles"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["films"].as_array().unwrap().is_empty());
    assert!(json["starships"].as_array().unwrap().is_empty());
    assert!(json["height"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_character_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/characters/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Character with id 999 not found");
}

// ---------------------------------------------------------------------------
// Missing references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_film_rejects_create(pool: PgPool) {
    let app = build_test_app(pool);
    let s1 = create(&app, "/api/v1/starships", json!({"name": "X-wing"})).await;

    let response = post_json(
        app.clone(),
        "/api/v1/characters",
        json!({"name": "Ghost", "film_ids": [999], "starship_ids": [s1]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_REFERENCE");
    assert_eq!(json["error"], "One or more films not found");

    let list = body_json(get(app, "/api/v1/characters").await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_starship_rejects_create(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/characters",
        json!({"name": "Ghost", "starship_ids": [5]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "One or more starships not found"
    );
}

// ---------------------------------------------------------------------------
// List / search / pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_search_and_paginate(pool: PgPool) {
    let app = build_test_app(pool);
    create(&app, "/api/v1/characters", json!({"name": "John Doe"})).await;
    create(&app, "/api/v1/characters", json!({"name": "Jane Doe"})).await;

    let json = body_json(get(app.clone(), "/api/v1/characters?skip=0&limit=10").await).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert!(json["items"][0]["films"].is_array());

    let json = body_json(get(app.clone(), "/api/v1/characters?skip=1&limit=10").await).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);

    let json = body_json(get(app.clone(), "/api/v1/characters?name=doe").await).await;
    assert_eq!(json["total"], 2);

    let json = body_json(get(app.clone(), "/api/v1/characters?name=john").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["name"], "John Doe");

    let json = body_json(get(app, "/api/v1/characters?name=Noone").await).await;
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_out_of_range_paging(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/characters?limit=101").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get(app.clone(), "/api/v1/characters?skip=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/characters?limit=100").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_default_page_size_is_ten(pool: PgPool) {
    let app = build_test_app(pool);
    for i in 0..12 {
        create(&app, "/api/v1/characters", json!({"name": format!("Clone {i}")})).await;
    }

    let json = body_json(get(app, "/api/v1/characters").await).await;
    assert_eq!(json["total"], 12);
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
}
