pub mod character;
pub mod film;
pub mod health;
pub mod starship;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters[/]       list, create
/// /characters/{id}     get
/// /films[/]            list, create
/// /films/{id}          get
/// /starships[/]        list, create
/// /starships/{id}      get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(character::router())
        .merge(film::router())
        .merge(starship::router())
}
