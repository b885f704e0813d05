//! Generic query engine over the three catalog entity tables.
//!
//! Every entity row type implements [`CatalogTable`], which names its table,
//! column list and search column. The functions here build the SQL for
//! filtered/paginated reads, id lookups, eager loading of relationship sets
//! and junction-row maintenance once, for all three tables.

use std::collections::HashMap;

use holocron_core::kind::EntityKind;
use holocron_core::pagination::PageRequest;
use holocron_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool, Row};

use crate::links::Link;
use crate::models::page::Page;

/// An entity table the query engine can read.
pub trait CatalogTable: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const KIND: EntityKind;
    const TABLE: &'static str;
    /// Comma-separated column list matching the `FromRow` fields.
    const COLUMNS: &'static str;
    /// Text column the list search filters on.
    const SEARCH_COLUMN: &'static str;
}

/// Filtered, windowed read over `T`'s table.
///
/// `total` is the number of rows matching the search term before `skip` /
/// `limit` are applied. Rows come back in id (insertion) order.
pub async fn search<T: CatalogTable>(
    pool: &PgPool,
    request: &PageRequest,
) -> Result<Page<T>, sqlx::Error> {
    let pattern = request.search_pattern();
    let filter = format!("($1::text IS NULL OR {} ILIKE $1)", T::SEARCH_COLUMN);

    let count_query = format!("SELECT COUNT(*) FROM {} WHERE {filter}", T::TABLE);
    let total = sqlx::query_scalar::<_, i64>(&count_query)
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

    let items_query = format!(
        "SELECT {} FROM {} WHERE {filter} ORDER BY id LIMIT $2 OFFSET $3",
        T::COLUMNS,
        T::TABLE
    );
    let items = sqlx::query_as::<_, T>(&items_query)
        .bind(pattern.as_deref())
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(pool)
        .await?;

    Ok(Page { total, items })
}

/// Find one row of `T` by id.
pub async fn find_by_id<'e, T, E>(executor: E, id: DbId) -> Result<Option<T>, sqlx::Error>
where
    T: CatalogTable,
    E: PgExecutor<'e>,
{
    let query = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Find every row of `T` whose id is in `ids`, ordered by id.
///
/// Ids that do not exist are simply absent from the result.
pub async fn find_by_ids<'e, T, E>(executor: E, ids: &[DbId]) -> Result<Vec<T>, sqlx::Error>
where
    T: CatalogTable,
    E: PgExecutor<'e>,
{
    let query = format!(
        "SELECT {} FROM {} WHERE id = ANY($1) ORDER BY id",
        T::COLUMNS,
        T::TABLE
    );
    sqlx::query_as::<_, T>(&query)
        .bind(ids)
        .fetch_all(executor)
        .await
}

/// The subset of `ids` that exist in `T`'s table, ordered by id.
pub async fn existing_ids<'e, T, E>(executor: E, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error>
where
    T: CatalogTable,
    E: PgExecutor<'e>,
{
    let query = format!(
        "SELECT id FROM {} WHERE id = ANY($1) ORDER BY id",
        T::TABLE
    );
    sqlx::query_scalar::<_, DbId>(&query)
        .bind(ids)
        .fetch_all(executor)
        .await
}

/// A related row tagged with the id of the owner it was loaded for.
struct RelatedRow<T> {
    owner_id: DbId,
    target: T,
}

impl<'r, T> FromRow<'r, PgRow> for RelatedRow<T>
where
    T: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            owner_id: row.try_get("owner_id")?,
            target: T::from_row(row)?,
        })
    }
}

/// Eager-load one relationship set for a batch of owners.
///
/// Issues a single query regardless of how many owners are passed, so a
/// page of N entities costs one round trip per relationship rather than N.
/// Owners with no related rows are absent from the map.
pub async fn load_related<T: CatalogTable>(
    pool: &PgPool,
    link: &Link,
    owner_ids: &[DbId],
) -> Result<HashMap<DbId, Vec<T>>, sqlx::Error> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT j.{owner} AS owner_id, {columns} \
         FROM {table} t \
         JOIN {junction} j ON j.{target} = t.id \
         WHERE j.{owner} = ANY($1) \
         ORDER BY j.{owner}, t.id",
        owner = link.owner_column,
        target = link.target_column,
        junction = link.table,
        table = T::TABLE,
        columns = qualified_columns(T::COLUMNS, "t"),
    );
    let rows = sqlx::query_as::<_, RelatedRow<T>>(&query)
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;

    let mut related: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        related.entry(row.owner_id).or_default().push(row.target);
    }
    Ok(related)
}

/// Insert `(owner_id, target_id)` pairs into a junction table.
///
/// Pairs that already exist are left untouched.
pub async fn insert_links(
    conn: &mut PgConnection,
    link: &Link,
    owner_id: DbId,
    target_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if target_ids.is_empty() {
        return Ok(());
    }

    let query = format!(
        "INSERT INTO {} ({}, {}) SELECT $1, UNNEST($2::bigint[]) ON CONFLICT DO NOTHING",
        link.table, link.owner_column, link.target_column
    );
    sqlx::query(&query)
        .bind(owner_id)
        .bind(target_ids)
        .execute(conn)
        .await?;
    Ok(())
}

/// Replace every pair owned by `owner_id` with the given targets.
pub async fn replace_links(
    conn: &mut PgConnection,
    link: &Link,
    owner_id: DbId,
    target_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    let query = format!("DELETE FROM {} WHERE {} = $1", link.table, link.owner_column);
    sqlx::query(&query)
        .bind(owner_id)
        .execute(&mut *conn)
        .await?;

    insert_links(conn, link, owner_id, target_ids).await
}

/// Move `T`'s id sequence past the largest stored id.
///
/// Rows inserted with explicit ids (the upstream sync) do not advance the
/// sequence; without this a later store-assigned id could collide.
pub async fn reset_id_sequence<T: CatalogTable>(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    let query = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)",
        table = T::TABLE
    );
    sqlx::query(&query).execute(conn).await?;
    Ok(())
}

/// Prefix every column in a comma-separated list with `alias.`.
fn qualified_columns(columns: &str, alias: &str) -> String {
    columns
        .split(',')
        .map(|column| format!("{alias}.{}", column.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_columns_prefixes_each_column() {
        assert_eq!(
            qualified_columns("id, name,height", "t"),
            "t.id, t.name, t.height"
        );
    }
}
