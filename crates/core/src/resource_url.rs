//! Stable ids for upstream catalog records.
//!
//! Upstream records identify themselves with a self URL such as
//! `https://swapi.info/api/films/1/`; the trailing path segment is the id the
//! record is stored under locally.

use crate::error::CoreError;
use crate::types::DbId;

/// Extract the numeric id from the last path segment of `url`.
///
/// A trailing slash is ignored. Any integer segment is accepted as-is;
/// a segment that does not parse as one is rejected.
pub fn extract_id_from_url(url: &str) -> Result<DbId, CoreError> {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    segment.parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!("resource URL has no numeric id: {url}"))
    })
}
