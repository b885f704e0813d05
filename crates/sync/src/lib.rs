//! Upstream catalog sync.
//!
//! Pulls films, starships and people from a [`CatalogSource`] and upserts
//! them under their upstream ids. Phases run in dependency order (films,
//! starships, characters) so each phase can link to rows the previous ones
//! wrote. References to rows that do not exist locally are dropped and
//! reported rather than failing the batch.

pub mod error;
pub mod phases;
pub mod report;
pub mod source;

pub use error::SyncError;
pub use phases::{sync_all, sync_characters, sync_films, sync_starships};
pub use report::{DroppedReference, PhaseReport, SyncReport};
pub use source::CatalogSource;
