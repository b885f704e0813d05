//! Where sync phases read upstream records from.

use std::future::Future;

use holocron_swapi::records::{FilmRecord, PersonRecord, StarshipRecord};
use holocron_swapi::{SwapiClient, SwapiError};

/// A provider of whole upstream collections.
///
/// Implemented by [`SwapiClient`] for the real catalog; tests supply
/// in-memory sources.
pub trait CatalogSource: Send + Sync {
    fn films(&self) -> impl Future<Output = Result<Vec<FilmRecord>, SwapiError>> + Send;

    fn starships(&self) -> impl Future<Output = Result<Vec<StarshipRecord>, SwapiError>> + Send;

    fn people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SwapiError>> + Send;
}

impl CatalogSource for SwapiClient {
    fn films(&self) -> impl Future<Output = Result<Vec<FilmRecord>, SwapiError>> + Send {
        self.fetch_films()
    }

    fn starships(&self) -> impl Future<Output = Result<Vec<StarshipRecord>, SwapiError>> + Send {
        self.fetch_starships()
    }

    fn people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SwapiError>> + Send {
        self.fetch_people()
    }
}
