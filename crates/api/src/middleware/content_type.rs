//! JSON content-type gate for write endpoints.

use axum::extract::FromRequestParts;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::AppError;

/// Requires `Content-Type: application/json` (media-type parameters such as
/// `charset` are allowed).
///
/// Place it before the `Json` body extractor so a wrong or missing content
/// type is rejected with 415 before the body is parsed:
///
/// ```ignore
/// async fn create(_json: RequireJson, Json(input): Json<CreateFilm>) -> AppResult<...>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireJson;

impl<S> FromRequestParts<S> for RequireJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&parts.headers) {
            Ok(RequireJson)
        } else {
            Err(AppError::UnsupportedMediaType(
                "Content-Type must be application/json".into(),
            ))
        }
    }
}

/// Whether the request declares a JSON body.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}
