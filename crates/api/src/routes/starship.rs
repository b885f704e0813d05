//! Route definitions for the `/starships` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::starship;
use crate::state::AppState;

/// Routes for `/starships`, merged into `/api/v1`.
///
/// The collection answers both with and without a trailing slash.
///
/// ```text
/// GET    /starships[/]     -> list
/// POST   /starships[/]     -> create
/// GET    /starships/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/starships", get(starship::list).post(starship::create))
        .route("/starships/", get(starship::list).post(starship::create))
        .route("/starships/{id}", get(starship::get_by_id))
}
