//! Upstream record shapes, as served by SWAPI.
//!
//! Only the fields the catalog stores are declared; everything else in the
//! upstream payload is ignored. Relationship fields are lists of resource
//! URLs whose trailing segment is the related row's id.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarshipRecord {
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub url: String,
}

/// A SWAPI `people` row; stored as a character.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_ignores_unknown_fields_and_defaults_links() {
        let person: PersonRecord = serde_json::from_value(serde_json::json!({
            "name": "R2-D2",
            "height": "96",
            "mass": "32",
            "eye_color": "red",
            "url": "https://swapi.info/api/people/3",
        }))
        .unwrap();

        assert_eq!(person.name, "R2-D2");
        assert!(person.films.is_empty());
        assert!(person.starships.is_empty());
    }

    #[test]
    fn film_keeps_episode_number() {
        let film: FilmRecord = serde_json::from_value(serde_json::json!({
            "title": "A New Hope",
            "episode_id": 4,
            "opening_crawl": "It is a period of civil war.",
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1977-05-25",
            "characters": ["https://swapi.info/api/people/1"],
            "url": "https://swapi.info/api/films/1",
        }))
        .unwrap();

        assert_eq!(film.episode_id, Some(4));
        assert_eq!(film.release_date.as_deref(), Some("1977-05-25"));
    }
}
