//! Route definitions for the `/films` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Routes for `/films`, merged into `/api/v1`.
///
/// The collection answers both with and without a trailing slash.
///
/// ```text
/// GET    /films[/]     -> list
/// POST   /films[/]     -> create
/// GET    /films/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(film::list).post(film::create))
        .route("/films/", get(film::list).post(film::create))
        .route("/films/{id}", get(film::get_by_id))
}
