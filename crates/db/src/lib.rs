//! Persistence layer for the Holocron catalog.
//!
//! - [`models`]: row structs, wire representations and create DTOs.
//! - [`catalog`]: the generic query engine shared by all three entity tables.
//! - [`resolver`]: all-or-nothing resolution of relationship ids on create.
//! - [`repositories`]: one zero-sized repo per entity kind.

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod error;
pub mod links;
pub mod models;
pub mod repositories;
pub mod resolver;

pub use error::{CatalogError, CatalogResult};

pub type DbPool = sqlx::PgPool;

/// Every table owned by the catalog schema, relationship tables first so a
/// drop never trips over a foreign key.
const CATALOG_TABLES: &[&str] = &[
    "character_films",
    "character_starships",
    "starship_films",
    "characters",
    "starships",
    "films",
    "_sqlx_migrations",
];

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drop every catalog table, including the migration ledger, so the next
/// [`run_migrations`] rebuilds the schema from scratch.
pub async fn drop_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for table in CATALOG_TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::warn!(tables = CATALOG_TABLES.len(), "Dropped catalog schema");
    Ok(())
}
