//! Character entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::film::Film;
use super::starship::Starship;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
}

/// A character with the films it appears in and the starships it piloted.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterWithRelations {
    #[serde(flatten)]
    pub character: Character,
    pub films: Vec<Film>,
    pub starships: Vec<Starship>,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    /// Film IDs to associate. Every distinct id must exist.
    #[serde(default)]
    pub film_ids: Vec<DbId>,
    /// Starship IDs to associate. Every distinct id must exist.
    #[serde(default)]
    pub starship_ids: Vec<DbId>,
}

/// Attributes written by the upstream sync for a character with a known id.
#[derive(Debug, Clone)]
pub struct UpsertCharacter {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
}
