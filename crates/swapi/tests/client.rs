//! `SwapiClient` against a local stand-in server.
//!
//! Each test binds an axum router to an ephemeral port and points the client
//! at it, so status codes and body shapes are exercised over real HTTP.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use holocron_swapi::{SwapiClient, SwapiError};
use serde_json::json;

/// Serve `app` on 127.0.0.1 and return a client whose base URL is `/api` on it.
async fn serve(app: Router) -> SwapiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    SwapiClient::new(format!("http://{addr}/api"))
}

#[tokio::test]
async fn fetches_typed_films() {
    let app = Router::new().route(
        "/api/films",
        get(|| async {
            Json(json!([
                {
                    "title": "A New Hope",
                    "episode_id": 4,
                    "opening_crawl": "It is a period of civil war.",
                    "director": "George Lucas",
                    "producer": "Gary Kurtz, Rick McCallum",
                    "release_date": "1977-05-25",
                    "url": "https://swapi.info/api/films/1"
                },
                {
                    "title": "The Empire Strikes Back",
                    "episode_id": 5,
                    "opening_crawl": null,
                    "director": "Irvin Kershner",
                    "producer": "Gary Kurtz, Rick McCallum",
                    "release_date": "1980-05-17",
                    "url": "https://swapi.info/api/films/2"
                }
            ]))
        }),
    );
    let client = serve(app).await;

    let films = client.fetch_films().await.unwrap();
    assert_eq!(films.len(), 2);
    assert_eq!(films[0].title, "A New Hope");
    assert_eq!(films[1].episode_id, Some(5));
    assert!(films[1].opening_crawl.is_none());
}

#[tokio::test]
async fn people_come_from_the_people_resource() {
    let app = Router::new().route(
        "/api/people",
        get(|| async {
            Json(json!([{
                "name": "Luke Skywalker",
                "height": "172",
                "mass": "77",
                "films": ["https://swapi.info/api/films/1"],
                "starships": ["https://swapi.info/api/starships/12"],
                "url": "https://swapi.info/api/people/1"
            }]))
        }),
    );
    let client = serve(app).await;

    let people = client.fetch_people().await.unwrap();
    assert_eq!(people[0].starships, vec!["https://swapi.info/api/starships/12"]);
}

#[tokio::test]
async fn fetch_all_returns_raw_rows() {
    let app = Router::new().route(
        "/api/starships",
        get(|| async { Json(json!([{"name": "X-wing", "url": "u/12"}, {"anything": true}])) }),
    );
    let client = serve(app).await;

    let rows = client.fetch_all("starships").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["anything"], true);
}

#[tokio::test]
async fn object_body_is_a_bad_upstream_response() {
    let app = Router::new().route(
        "/api/films",
        get(|| async { Json(json!({"count": 6, "results": []})) }),
    );
    let client = serve(app).await;

    assert_matches!(
        client.fetch_all("films").await,
        Err(SwapiError::BadUpstreamResponse { .. })
    );
}

#[tokio::test]
async fn non_success_status_is_propagated() {
    let app = Router::new().route(
        "/api/films",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let client = serve(app).await;

    let err = client.fetch_films().await.unwrap_err();
    assert_matches!(
        err,
        SwapiError::UpstreamStatus { status: 503, ref body } if body == "down for maintenance"
    );
}

#[tokio::test]
async fn unknown_resource_is_a_404_status() {
    let client = serve(Router::new()).await;

    assert_matches!(
        client.fetch_all("planets").await,
        Err(SwapiError::UpstreamStatus { status: 404, .. })
    );
}

#[tokio::test]
async fn mis_shaped_row_is_a_decode_error() {
    let app = Router::new().route(
        "/api/starships",
        get(|| async { Json(json!([{"model": "no name or url"}])) }),
    );
    let client = serve(app).await;

    assert_matches!(
        client.fetch_starships().await,
        Err(SwapiError::Decode { ref resource, .. }) if resource == "starships"
    );
}
