//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` bare struct matching the database row
//! - A `...WithRelations` full representation (bare fields plus one level of
//!   bare related entities)
//! - A `Deserialize` create DTO carrying the related id lists
//! - An upsert DTO used by the upstream sync

pub mod character;
pub mod film;
pub mod page;
pub mod starship;
