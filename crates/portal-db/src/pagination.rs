//! Offset/limit query bounding.
//!
//! [`paginate`] appends `LIMIT`/`OFFSET` to a base query. [`fetch_page`] runs
//! the count query and then the bounded page query on the same connection.
//! The two reads are not in one transaction, so under concurrent writes
//! `total_pages` can briefly disagree with the fetched rows.
//!
//! Base queries must carry a total `ORDER BY` (ending in a primary key) for
//! pages to be deterministic.

use portal_core::pagination::{PageRequest, Paginated, compute_page_metadata};

use crate::error::DatabaseError;
use crate::helpers::count_to_u64;

/// Bound `base_query` to the rows of one page.
///
/// Limit and offset are integers from a validated [`PageRequest`], so they
/// are formatted into the SQL rather than bound.
#[must_use]
pub fn paginate(base_query: &str, request: PageRequest) -> String {
    format!(
        "{} LIMIT {} OFFSET {}",
        base_query.trim_end(),
        request.limit(),
        request.offset()
    )
}

/// Count the total rows, fetch one page, and assemble the envelope.
///
/// `count_sql` must return a single `COUNT(*)` column. Both queries are run
/// with the same positional `params`.
pub(crate) async fn fetch_page<T>(
    conn: &libsql::Connection,
    count_sql: &str,
    select_sql: &str,
    params: Vec<libsql::Value>,
    request: PageRequest,
    map_row: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Paginated<T>, DatabaseError> {
    let mut rows = conn
        .query(count_sql, libsql::params_from_iter(params.clone()))
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let total_items = count_to_u64(row.get::<i64>(0)?)?;

    let mut items = Vec::new();
    let mut rows = conn
        .query(
            &paginate(select_sql, request),
            libsql::params_from_iter(params),
        )
        .await?;
    while let Some(row) = rows.next().await? {
        items.push(map_row(&row)?);
    }

    Ok(Paginated::new(
        items,
        compute_page_metadata(total_items, request),
    ))
}
