use holocron_core::error::CoreError;
use holocron_swapi::SwapiError;

/// Errors that abort a sync phase.
///
/// A failed phase rolls back its own transaction; phases that already
/// committed stay committed.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Upstream fetch failed: {0}")]
    Upstream(#[from] SwapiError),

    /// A record's own URL carried no usable id.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
