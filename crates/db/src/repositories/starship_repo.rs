//! Repository for the `starships` table and its film/character links.

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
use crate::models::film::Film;
use crate::models::page::Page;
use crate::models::starship::{CreateStarship, Starship, StarshipWithRelations, UpsertStarship};
use crate::resolver;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, model, starship_class";

impl CatalogTable for Starship {
    const KIND: EntityKind = EntityKind::Starship;
    const TABLE: &'static str = "starships";
    const COLUMNS: &'static str = COLUMNS;
    const SEARCH_COLUMN: &'static str = "name";
}

/// List, get and create for starships, plus the sync upsert helpers.
pub struct StarshipRepo;

impl StarshipRepo {
    /// Insert a new starship together with its film and character links.
    ///
    /// Film ids are resolved before character ids; nothing is written unless
    /// both sets resolve completely.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStarship,
    ) -> CatalogResult<StarshipWithRelations> {
        let mut tx = pool.begin().await?;

        let films = resolver::resolve::<Film>(&mut tx, &input.film_ids).await?;
        let characters = resolver::resolve::<Character>(&mut tx, &input.character_ids).await?;

        let query = format!(
            "INSERT INTO starships (name, model, starship_class)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let starship = sqlx::query_as::<_, Starship>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.starship_class)
            .fetch_one(&mut *tx)
            .await?;

        catalog::insert_links(
            &mut tx,
            &links::STARSHIP_FILMS,
            starship.id,
            &distinct_ids(&input.film_ids),
        )
        .await?;
        catalog::insert_links(
            &mut tx,
            &links::STARSHIP_CHARACTERS,
            starship.id,
            &distinct_ids(&input.character_ids),
        )
        .await?;

        tx.commit().await?;
        tracing::info!(
            starship_id = starship.id,
            films = films.len(),
            characters = characters.len(),
            "Starship created"
        );

        Ok(StarshipWithRelations {
            starship,
            films,
            characters,
        })
    }

    /// Find a starship by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Starship>, sqlx::Error> {
        catalog::find_by_id::<Starship, _>(pool, id).await
    }

    /// Find a starship by ID, enriched with its films and characters.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StarshipWithRelations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(starship) => Ok(Self::with_relations(pool, vec![starship]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Like [`Self::find_by_id_with_relations`], but a missing row is a
    /// `NotFound` error.
    pub async fn get(pool: &PgPool, id: DbId) -> CatalogResult<StarshipWithRelations> {
        Self::find_by_id_with_relations(pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: EntityKind::Starship.name(),
                    id,
                }
                .into()
            })
    }

    /// Page through starships, optionally filtered by a case-insensitive
    /// substring of the name.
    pub async fn list(
        pool: &PgPool,
        request: &PageRequest,
    ) -> Result<Page<StarshipWithRelations>, sqlx::Error> {
        let mut page = catalog::search::<Starship>(pool, request).await?;
        let rows = std::mem::take(&mut page.items);
        let items = Self::with_relations(pool, rows).await?;
        Ok(page.with_items(items))
    }

    /// Insert or update a starship under a known id (upstream sync).
    pub async fn upsert(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpsertStarship,
    ) -> Result<Starship, sqlx::Error> {
        let query = format!(
            "INSERT INTO starships (id, name, model, starship_class)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                model = EXCLUDED.model,
                starship_class = EXCLUDED.starship_class,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Starship>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.starship_class)
            .fetch_one(conn)
            .await
    }

    /// Replace all film associations for a starship.
    pub async fn set_films(
        conn: &mut PgConnection,
        starship_id: DbId,
        film_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        catalog::replace_links(conn, &links::STARSHIP_FILMS, starship_id, film_ids).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Attach films and characters to a batch of starships.
    async fn with_relations(
        pool: &PgPool,
        starships: Vec<Starship>,
    ) -> Result<Vec<StarshipWithRelations>, sqlx::Error> {
        let ids: Vec<DbId> = starships.iter().map(|s| s.id).collect();
        let mut films = catalog::load_related::<Film>(pool, &links::STARSHIP_FILMS, &ids).await?;
        let mut characters =
            catalog::load_related::<Character>(pool, &links::STARSHIP_CHARACTERS, &ids).await?;

        Ok(starships
            .into_iter()
            .map(|starship| StarshipWithRelations {
                films: films.remove(&starship.id).unwrap_or_default(),
                characters: characters.remove(&starship.id).unwrap_or_default(),
                starship,
            })
            .collect())
    }
}
