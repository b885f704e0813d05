//! Client for the public Star Wars catalog API (SWAPI).
//!
//! [`client::SwapiClient`] fetches whole resource collections in a single
//! request; [`records`] holds the typed shapes of the upstream rows.

pub mod client;
pub mod records;

pub use client::{SwapiClient, SwapiError, DEFAULT_BASE_URL};
