//! Repository for the `films` table and its character/starship links.

use holocron_core::error::CoreError;
use holocron_core::kind::EntityKind;
use holocron_core::pagination::PageRequest;
use holocron_core::relation::distinct_ids;
use holocron_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::catalog::{self, CatalogTable};
use crate::error::CatalogResult;
use crate::links;
use crate::models::character::Character;
use crate::models::film::{CreateFilm, Film, FilmWithRelations, UpsertFilm};
use crate::models::page::Page;
use crate::models::starship::Starship;
use crate::resolver;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, episode_id, opening_crawl, director, producer, release_date";

impl CatalogTable for Film {
    const KIND: EntityKind = EntityKind::Film;
    const TABLE: &'static str = "films";
    const COLUMNS: &'static str = COLUMNS;
    const SEARCH_COLUMN: &'static str = "title";
}

/// List, get and create for films, plus the sync upsert.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film together with its character and starship links.
    ///
    /// Character ids are resolved before starship ids; nothing is written
    /// unless both sets resolve completely.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> CatalogResult<FilmWithRelations> {
        let mut tx = pool.begin().await?;

        let characters = resolver::resolve::<Character>(&mut tx, &input.character_ids).await?;
        let starships = resolver::resolve::<Starship>(&mut tx, &input.starship_ids).await?;

        let query = format!(
            "INSERT INTO films
                (title, episode_id, opening_crawl, director, producer, release_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let film = sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(input.episode_id)
            .bind(&input.opening_crawl)
            .bind(&input.director)
            .bind(&input.producer)
            .bind(&input.release_date)
            .fetch_one(&mut *tx)
            .await?;

        catalog::insert_links(
            &mut tx,
            &links::FILM_CHARACTERS,
            film.id,
            &distinct_ids(&input.character_ids),
        )
        .await?;
        catalog::insert_links(
            &mut tx,
            &links::FILM_STARSHIPS,
            film.id,
            &distinct_ids(&input.starship_ids),
        )
        .await?;

        tx.commit().await?;
        tracing::info!(
            film_id = film.id,
            characters = characters.len(),
            starships = starships.len(),
            "Film created"
        );

        Ok(FilmWithRelations {
            film,
            characters,
            starships,
        })
    }

    /// Find a film by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        catalog::find_by_id::<Film, _>(pool, id).await
    }

    /// Find a film by ID, enriched with its characters and starships.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FilmWithRelations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(film) => Ok(Self::with_relations(pool, vec![film]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Like [`Self::find_by_id_with_relations`], but a missing row is a
    /// `NotFound` error.
    pub async fn get(pool: &PgPool, id: DbId) -> CatalogResult<FilmWithRelations> {
        Self::find_by_id_with_relations(pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: EntityKind::Film.name(),
                    id,
                }
                .into()
            })
    }

    /// Page through films, optionally filtered by a case-insensitive
    /// substring of the title.
    pub async fn list(
        pool: &PgPool,
        request: &PageRequest,
    ) -> Result<Page<FilmWithRelations>, sqlx::Error> {
        let mut page = catalog::search::<Film>(pool, request).await?;
        let rows = std::mem::take(&mut page.items);
        let items = Self::with_relations(pool, rows).await?;
        Ok(page.with_items(items))
    }

    /// Insert or update a film under a known id (upstream sync).
    pub async fn upsert(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpsertFilm,
    ) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films
                (id, title, episode_id, opening_crawl, director, producer, release_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                episode_id = EXCLUDED.episode_id,
                opening_crawl = EXCLUDED.opening_crawl,
                director = EXCLUDED.director,
                producer = EXCLUDED.producer,
                release_date = EXCLUDED.release_date,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.episode_id)
            .bind(&input.opening_crawl)
            .bind(&input.director)
            .bind(&input.producer)
            .bind(&input.release_date)
            .fetch_one(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Attach characters and starships to a batch of films.
    async fn with_relations(
        pool: &PgPool,
        films: Vec<Film>,
    ) -> Result<Vec<FilmWithRelations>, sqlx::Error> {
        let ids: Vec<DbId> = films.iter().map(|f| f.id).collect();
        let mut characters =
            catalog::load_related::<Character>(pool, &links::FILM_CHARACTERS, &ids).await?;
        let mut starships =
            catalog::load_related::<Starship>(pool, &links::FILM_STARSHIPS, &ids).await?;

        Ok(films
            .into_iter()
            .map(|film| FilmWithRelations {
                characters: characters.remove(&film.id).unwrap_or_default(),
                starships: starships.remove(&film.id).unwrap_or_default(),
                film,
            })
            .collect())
    }
}
