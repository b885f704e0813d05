//! Starship entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::character::Character;
use super::film::Film;

/// A starship row from the `starships` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Starship {
    pub id: DbId,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
}

/// A starship with the films it appears in and the characters who flew it.
#[derive(Debug, Clone, Serialize)]
pub struct StarshipWithRelations {
    #[serde(flatten)]
    pub starship: Starship,
    pub films: Vec<Film>,
    pub characters: Vec<Character>,
}

/// DTO for creating a new starship.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStarship {
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    #[serde(default)]
    pub film_ids: Vec<DbId>,
    #[serde(default)]
    pub character_ids: Vec<DbId>,
}

/// Attributes written by the upstream sync for a starship with a known id.
#[derive(Debug, Clone)]
pub struct UpsertStarship {
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
}
