//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&PgPool` (reads, creates) or `&mut PgConnection` (steps that run
//! inside a caller-owned transaction) as the first argument.

pub mod character_repo;
pub mod film_repo;
pub mod starship_repo;

pub use character_repo::CharacterRepo;
pub use film_repo::FilmRepo;
pub use starship_repo::StarshipRepo;
