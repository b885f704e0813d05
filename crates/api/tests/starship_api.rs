//! HTTP-level integration tests for `/api/v1/starships`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_starship_with_pilots_and_films(pool: PgPool) {
    let app = build_test_app(pool);

    let film = body_json(post_json(app.clone(), "/api/v1/films", json!({"title": "A New Hope"})).await).await;
    let han = body_json(post_json(app.clone(), "/api/v1/characters", json!({"name": "Han Solo"})).await).await;

    let response = post_json(
        app.clone(),
        "/api/v1/starships",
        json!({
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "starship_class": "Light freighter",
            "film_ids": [film["id"]],
            "character_ids": [han["id"], han["id"]],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let starship = body_json(response).await;
    assert_eq!(starship["starshipClass"], "Light freighter");
    assert_eq!(starship["films"].as_array().unwrap().len(), 1);
    assert_eq!(starship["characters"].as_array().unwrap().len(), 1);

    let id = starship["id"].as_i64().unwrap();
    let fetched = body_json(get(app, &format!("/api/v1/starships/{id}")).await).await;
    assert_eq!(fetched["characters"][0]["name"], "Han Solo");
    assert_eq!(fetched["model"], "YT-1300 light freighter");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_starship_checks_films_before_characters(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/starships",
        json!({"name": "Ghost", "film_ids": [7], "character_ids": [8]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_REFERENCE");
    assert_eq!(json["error"], "One or more films not found");

    let list = body_json(get(app, "/api/v1/starships").await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_pilot_rejects_starship_after_films_resolved(pool: PgPool) {
    let app = build_test_app(pool);
    let film = body_json(post_json(app.clone(), "/api/v1/films", json!({"title": "A New Hope"})).await).await;

    let response = post_json(
        app.clone(),
        "/api/v1/starships",
        json!({"name": "Ghost", "film_ids": [film["id"]], "character_ids": [404]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "One or more characters not found"
    );

    let list = body_json(get(app.clone(), "/api/v1/starships").await).await;
    assert_eq!(list["total"], 0);
    let id = film["id"].as_i64().unwrap();
    let film = body_json(get(app, &format!("/api/v1/films/{id}")).await).await;
    assert!(film["starships"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_starship_search_uses_name(pool: PgPool) {
    let app = build_test_app(pool);
    for name in ["Star Destroyer", "Death Star", "X-wing"] {
        post_json(app.clone(), "/api/v1/starships", json!({"name": name})).await;
    }

    let json = body_json(get(app, "/api/v1/starships?name=star").await).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["name"], "Star Destroyer");
    assert_eq!(json["items"][1]["name"], "Death Star");
}
