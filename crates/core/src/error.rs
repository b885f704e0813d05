use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more ids supplied for a relationship do not exist.
    ///
    /// `relation` is the plural relationship name (`"films"`, `"starships"`,
    /// `"characters"`) so callers can tell which list was at fault.
    #[error("One or more {relation} not found")]
    MissingReference { relation: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
