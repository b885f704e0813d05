//! The three sync phases and the full run.
//!
//! Each phase fetches its whole collection first, then writes inside one
//! transaction: upsert every record by its upstream id, replace its outgoing
//! links with the referenced ids that exist, and finally move the table's id
//! sequence past the upstream ids so later API creates cannot collide.

use holocron_core::kind::EntityKind;
use holocron_core::relation::distinct_ids;
use holocron_core::resource_url::extract_id_from_url;
use holocron_core::types::DbId;
use holocron_db::catalog::{self, CatalogTable};
use holocron_db::models::character::{Character, UpsertCharacter};
use holocron_db::models::film::{Film, UpsertFilm};
use holocron_db::models::starship::{Starship, UpsertStarship};
use holocron_db::repositories::{CharacterRepo, FilmRepo, StarshipRepo};
use sqlx::{PgConnection, PgPool};

use crate::error::SyncError;
use crate::report::{DroppedReference, PhaseReport, SyncReport};
use crate::source::CatalogSource;

/// Upsert every upstream film.
pub async fn sync_films<S: CatalogSource>(
    pool: &PgPool,
    source: &S,
) -> Result<PhaseReport, SyncError> {
    let records = source.films().await?;
    let mut report = PhaseReport::new(EntityKind::Film);

    let mut tx = pool.begin().await?;
    for record in &records {
        let id = extract_id_from_url(&record.url)?;
        let input = UpsertFilm {
            title: record.title.clone(),
            episode_id: record.episode_id,
            opening_crawl: record.opening_crawl.clone(),
            director: record.director.clone(),
            producer: record.producer.clone(),
            release_date: record.release_date.clone(),
        };
        FilmRepo::upsert(&mut tx, id, &input).await?;
        report.upserted += 1;
    }
    catalog::reset_id_sequence::<Film>(&mut tx).await?;
    tx.commit().await?;

    tracing::info!(upserted = report.upserted, "Films synced");
    Ok(report)
}

/// Upsert every upstream starship and link it to its films.
///
/// Run after [`sync_films`]; film references that are not stored locally
/// are dropped.
pub async fn sync_starships<S: CatalogSource>(
    pool: &PgPool,
    source: &S,
) -> Result<PhaseReport, SyncError> {
    let records = source.starships().await?;
    let mut report = PhaseReport::new(EntityKind::Starship);

    let mut tx = pool.begin().await?;
    for record in &records {
        let id = extract_id_from_url(&record.url)?;
        let input = UpsertStarship {
            name: record.name.clone(),
            model: record.model.clone(),
            starship_class: record.starship_class.clone(),
        };
        StarshipRepo::upsert(&mut tx, id, &input).await?;
        report.upserted += 1;

        let film_ids = linkable::<Film>(&mut tx, id, &record.films, &mut report).await?;
        StarshipRepo::set_films(&mut tx, id, &film_ids).await?;
    }
    catalog::reset_id_sequence::<Starship>(&mut tx).await?;
    tx.commit().await?;

    tracing::info!(
        upserted = report.upserted,
        linked = report.linked,
        dropped = report.dropped.len(),
        "Starships synced"
    );
    Ok(report)
}

/// Upsert every upstream person as a character and link films and starships.
///
/// Run after [`sync_films`] and [`sync_starships`].
pub async fn sync_characters<S: CatalogSource>(
    pool: &PgPool,
    source: &S,
) -> Result<PhaseReport, SyncError> {
    let records = source.people().await?;
    let mut report = PhaseReport::new(EntityKind::Character);

    let mut tx = pool.begin().await?;
    for record in &records {
        let id = extract_id_from_url(&record.url)?;
        let input = UpsertCharacter {
            name: record.name.clone(),
            height: record.height.clone(),
            mass: record.mass.clone(),
        };
        CharacterRepo::upsert(&mut tx, id, &input).await?;
        report.upserted += 1;

        let film_ids = linkable::<Film>(&mut tx, id, &record.films, &mut report).await?;
        CharacterRepo::set_films(&mut tx, id, &film_ids).await?;

        let starship_ids =
            linkable::<Starship>(&mut tx, id, &record.starships, &mut report).await?;
        CharacterRepo::set_starships(&mut tx, id, &starship_ids).await?;
    }
    catalog::reset_id_sequence::<Character>(&mut tx).await?;
    tx.commit().await?;

    tracing::info!(
        upserted = report.upserted,
        linked = report.linked,
        dropped = report.dropped.len(),
        "Characters synced"
    );
    Ok(report)
}

/// Run all three phases in dependency order.
///
/// Stops at the first failing phase; earlier phases stay committed.
pub async fn sync_all<S: CatalogSource>(pool: &PgPool, source: &S) -> Result<SyncReport, SyncError> {
    let films = sync_films(pool, source).await?;
    let starships = sync_starships(pool, source).await?;
    let characters = sync_characters(pool, source).await?;

    Ok(SyncReport {
        films,
        starships,
        characters,
    })
}

/// Resolve relationship URLs to the ids of `T` rows that exist.
///
/// URLs without an id, and ids with no stored row, are recorded on
/// `report` as dropped. The returned ids are distinct and sorted.
async fn linkable<T: CatalogTable>(
    conn: &mut PgConnection,
    owner_id: DbId,
    urls: &[String],
    report: &mut PhaseReport,
) -> Result<Vec<DbId>, sqlx::Error> {
    let owner = report.kind;
    let record_drop = |url: &str, report: &mut PhaseReport| {
        tracing::debug!(%owner, owner_id, related = %T::KIND, url, "Dropping unresolved reference");
        report.dropped.push(DroppedReference {
            owner,
            owner_id,
            target: T::KIND,
            url: url.to_string(),
        });
    };

    let mut parsed = Vec::with_capacity(urls.len());
    for url in urls {
        match extract_id_from_url(url) {
            Ok(id) => parsed.push((id, url.as_str())),
            Err(_) => record_drop(url.as_str(), report),
        }
    }
    if parsed.is_empty() {
        return Ok(Vec::new());
    }

    let requested = distinct_ids(&parsed.iter().map(|(id, _)| *id).collect::<Vec<_>>());
    let existing = catalog::existing_ids::<T, _>(&mut *conn, &requested).await?;
    for (id, url) in parsed {
        if existing.binary_search(&id).is_err() {
            record_drop(url, report);
        }
    }

    report.linked += existing.len();
    Ok(existing)
}
