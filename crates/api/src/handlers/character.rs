//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holocron_core::types::DbId;
use holocron_db::models::character::CreateCharacter;
use holocron_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::middleware::content_type::RequireJson;
use crate::query::NameSearchParams;
use crate::state::AppState;

/// GET /api/v1/characters?skip=&limit=&name=
///
/// Page through characters with their films and starships.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_page_request()?;
    let page = CharacterRepo::list(&state.pool, &request).await?;
    Ok(Json(page))
}

/// POST /api/v1/characters
///
/// Create a character; every referenced film and starship must exist.
pub async fn create(
    State(state): State<AppState>,
    _json: RequireJson,
    Json(input): Json<CreateCharacter>,
) -> AppResult<impl IntoResponse> {
    let created = CharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let character = CharacterRepo::get(&state.pool, id).await?;
    Ok(Json(character))
}
