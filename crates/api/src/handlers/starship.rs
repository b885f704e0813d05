//! Handlers for the `/starships` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holocron_core::types::DbId;
use holocron_db::models::starship::CreateStarship;
use holocron_db::repositories::StarshipRepo;

use crate::error::AppResult;
use crate::middleware::content_type::RequireJson;
use crate::query::NameSearchParams;
use crate::state::AppState;

/// GET /api/v1/starships?skip=&limit=&name=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_page_request()?;
    let page = StarshipRepo::list(&state.pool, &request).await?;
    Ok(Json(page))
}

/// POST /api/v1/starships
///
/// Create a starship; films are checked before pilots.
pub async fn create(
    State(state): State<AppState>,
    _json: RequireJson,
    Json(input): Json<CreateStarship>,
) -> AppResult<impl IntoResponse> {
    let created = StarshipRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/starships/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let starship = StarshipRepo::get(&state.pool, id).await?;
    Ok(Json(starship))
}
