//! Repository for the `characters` table and its film/starship links.

use holocron_core::error::CoreError;
use holocron_core::kind::EntityKind;
use holocron_core::pagination::PageRequest;
use holocron_core::relation::distinct_ids;
use holocron_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::catalog::{self, CatalogTable};
use crate::error::CatalogResult;
use crate::links;
use crate::models::character::{
    Character, CharacterWithRelations, CreateCharacter, UpsertCharacter,
};
use crate::models::film::Film;
use crate::models::page::Page;
use crate::models::starship::Starship;
use crate::resolver;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, height, mass";

impl CatalogTable for Character {
    const KIND: EntityKind = EntityKind::Character;
    const TABLE: &'static str = "characters";
    const COLUMNS: &'static str = COLUMNS;
    const SEARCH_COLUMN: &'static str = "name";
}

/// List, get and create for characters, plus the sync upsert helpers.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character together with its film and starship links.
    ///
    /// Film ids are resolved first, then starship ids; the first incomplete
    /// set fails the call with `MissingReference` before anything is written.
    /// The row and both link sets are committed in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacter,
    ) -> CatalogResult<CharacterWithRelations> {
        let mut tx = pool.begin().await?;

        let films = resolver::resolve::<Film>(&mut tx, &input.film_ids).await?;
        let starships = resolver::resolve::<Starship>(&mut tx, &input.starship_ids).await?;

        let query = format!(
            "INSERT INTO characters (name, height, mass)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.height)
            .bind(&input.mass)
            .fetch_one(&mut *tx)
            .await?;

        catalog::insert_links(
            &mut tx,
            &links::CHARACTER_FILMS,
            character.id,
            &distinct_ids(&input.film_ids),
        )
        .await?;
        catalog::insert_links(
            &mut tx,
            &links::CHARACTER_STARSHIPS,
            character.id,
            &distinct_ids(&input.starship_ids),
        )
        .await?;

        tx.commit().await?;
        tracing::info!(
            character_id = character.id,
            films = films.len(),
            starships = starships.len(),
            "Character created"
        );

        Ok(CharacterWithRelations {
            character,
            films,
            starships,
        })
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        catalog::find_by_id::<Character, _>(pool, id).await
    }

    /// Find a character by ID, enriched with its films and starships.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterWithRelations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(character) => {
                let mut enriched = Self::with_relations(pool, vec![character]).await?;
                Ok(enriched.pop())
            }
            None => Ok(None),
        }
    }

    /// Like [`Self::find_by_id_with_relations`], but a missing row is a
    /// `NotFound` error.
    pub async fn get(pool: &PgPool, id: DbId) -> CatalogResult<CharacterWithRelations> {
        Self::find_by_id_with_relations(pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: EntityKind::Character.name(),
                    id,
                }
                .into()
            })
    }

    /// Page through characters, optionally filtered by a case-insensitive
    /// substring of the name.
    pub async fn list(
        pool: &PgPool,
        request: &PageRequest,
    ) -> Result<Page<CharacterWithRelations>, sqlx::Error> {
        let mut page = catalog::search::<Character>(pool, request).await?;
        let rows = std::mem::take(&mut page.items);
        let items = Self::with_relations(pool, rows).await?;
        Ok(page.with_items(items))
    }

    /// Insert or update a character under a known id (upstream sync).
    pub async fn upsert(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpsertCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (id, name, height, mass)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                height = EXCLUDED.height,
                mass = EXCLUDED.mass,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.height)
            .bind(&input.mass)
            .fetch_one(conn)
            .await
    }

    /// Replace all film associations for a character.
    pub async fn set_films(
        conn: &mut PgConnection,
        character_id: DbId,
        film_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        catalog::replace_links(conn, &links::CHARACTER_FILMS, character_id, film_ids).await
    }

    /// Replace all starship associations for a character.
    pub async fn set_starships(
        conn: &mut PgConnection,
        character_id: DbId,
        starship_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        catalog::replace_links(conn, &links::CHARACTER_STARSHIPS, character_id, starship_ids)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Attach films and starships to a batch of characters.
    async fn with_relations(
        pool: &PgPool,
        characters: Vec<Character>,
    ) -> Result<Vec<CharacterWithRelations>, sqlx::Error> {
        let ids: Vec<DbId> = characters.iter().map(|c| c.id).collect();
        let mut films = catalog::load_related::<Film>(pool, &links::CHARACTER_FILMS, &ids).await?;
        let mut starships =
            catalog::load_related::<Starship>(pool, &links::CHARACTER_STARSHIPS, &ids).await?;

        Ok(characters
            .into_iter()
            .map(|character| CharacterWithRelations {
                films: films.remove(&character.id).unwrap_or_default(),
                starships: starships.remove(&character.id).unwrap_or_default(),
                character,
            })
            .collect())
    }
}
