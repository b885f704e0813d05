//! Handlers for the `/films` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holocron_core::types::DbId;
use holocron_db::models::film::CreateFilm;
use holocron_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::middleware::content_type::RequireJson;
use crate::query::TitleSearchParams;
use crate::state::AppState;

/// GET /api/v1/films?skip=&limit=&title=
///
/// Page through films with their characters and starships.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_page_request()?;
    let page = FilmRepo::list(&state.pool, &request).await?;
    Ok(Json(page))
}

/// POST /api/v1/films
///
/// Create a film; every referenced character and starship must exist.
pub async fn create(
    State(state): State<AppState>,
    _json: RequireJson,
    Json(input): Json<CreateFilm>,
) -> AppResult<impl IntoResponse> {
    let created = FilmRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let film = FilmRepo::get(&state.pool, id).await?;
    Ok(Json(film))
}
