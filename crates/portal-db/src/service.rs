//! Service layer hosting all portal operations.
//!
//! `PortalService` wraps `PortalDb`. All repo methods are implemented as
//! `impl PortalService` blocks under `repos/`. Each method acquires its own
//! connection and lets it drop on return, success or error.

use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;

use crate::PortalDb;
use crate::error::DatabaseError;

pub struct PortalService {
    db: PortalDb,
}

impl PortalService {
    /// Create a service over a local database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PortalDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `PortalDb`.
    #[must_use]
    pub const fn from_db(db: PortalDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PortalDb {
        &self.db
    }

    /// Fail with `NotFound` unless a row of `kind` with `id` exists.
    pub(crate) async fn ensure_exists(
        conn: &libsql::Connection,
        kind: EntityKind,
        id: i64,
    ) -> Result<(), DatabaseError> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?1", kind.table());
        let mut rows = conn.query(&sql, [id]).await?;
        if rows.next().await?.is_none() {
            tracing::debug!(entity = kind.as_str(), id, "entity not found");
            return Err(CoreError::not_found(kind, id).into());
        }
        Ok(())
    }
}
