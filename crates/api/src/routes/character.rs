//! Route definitions for the `/characters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes for `/characters`, merged into `/api/v1`.
///
/// The collection answers both with and without a trailing slash.
///
/// ```text
/// GET    /characters[/]     -> list
/// POST   /characters[/]     -> create
/// GET    /characters/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(character::list).post(character::create))
        .route("/characters/", get(character::list).post(character::create))
        .route("/characters/{id}", get(character::get_by_id))
}
