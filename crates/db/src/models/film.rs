//! Film entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::character::Character;
use super::starship::Starship;

/// A film row from the `films` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
}

/// A film with its cast and the starships that appear in it.
#[derive(Debug, Clone, Serialize)]
pub struct FilmWithRelations {
    #[serde(flatten)]
    pub film: Film,
    pub characters: Vec<Character>,
    pub starships: Vec<Starship>,
}

/// DTO for creating a new film.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub character_ids: Vec<DbId>,
    #[serde(default)]
    pub starship_ids: Vec<DbId>,
}

/// Attributes written by the upstream sync for a film with a known id.
#[derive(Debug, Clone)]
pub struct UpsertFilm {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
}
