use holocron_core::error::CoreError;

/// Error returned by catalog operations that both validate and persist.
///
/// Read-only repository methods return plain [`sqlx::Error`]; anything that
/// can also fail a domain rule (missing reference, not found) returns this.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
