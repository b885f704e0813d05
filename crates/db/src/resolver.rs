//! All-or-nothing resolution of relationship ids supplied on create.

use holocron_core::relation::{distinct_ids, ensure_all_resolved};
use holocron_core::types::DbId;
use sqlx::PgConnection;

use crate::catalog::{self, CatalogTable};
use crate::error::CatalogResult;

/// Load every entity of kind `T` named in `requested`.
///
/// Duplicate ids collapse to one entity. Fails with
/// `CoreError::MissingReference` (naming `T`'s relationship, e.g. `"films"`)
/// unless every distinct id exists. An empty request resolves to nothing
/// without touching the database.
pub async fn resolve<T: CatalogTable>(
    conn: &mut PgConnection,
    requested: &[DbId],
) -> CatalogResult<Vec<T>> {
    if requested.is_empty() {
        return Ok(Vec::new());
    }

    let distinct = distinct_ids(requested);
    let found = catalog::find_by_ids::<T, _>(&mut *conn, &distinct).await?;

    if let Err(err) = ensure_all_resolved(T::KIND, distinct.len(), found.len()) {
        tracing::debug!(
            relation = T::KIND.plural(),
            requested = distinct.len(),
            found = found.len(),
            "Unresolved relationship ids"
        );
        return Err(err.into());
    }

    Ok(found)
}
