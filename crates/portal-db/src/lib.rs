//! # portal-db
//!
//! libSQL storage for the language portal.
//!
//! Handles all relational state: words, groups, study sessions, scheduled
//! review items, and the review event log. Listings are paged with
//! offset/limit and carry read-time aggregates (correct/wrong counts, word
//! counts, review-item counts) computed with grouped conditional counts.
//!
//! Every operation opens its own connection from the shared [`PortalDb`]
//! handle and drops it on return, so no connection outlives a request.

pub mod error;
pub mod helpers;
mod migrations;
pub mod pagination;
pub mod repos;
pub mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Path libSQL treats as a private in-memory database.
const MEMORY_PATH: &str = ":memory:";

/// Shared database handle. Hands out short-lived connections.
pub struct PortalDb {
    db: libsql::Database,
}

impl PortalDb {
    /// Open a local database file, creating it if needed.
    ///
    /// Applies the schema automatically on open.
    ///
    /// `":memory:"` is rejected: each connection would get its own empty
    /// database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the schema
    /// fails to apply.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path == MEMORY_PATH {
            return Err(DatabaseError::InvalidState(
                "in-memory databases are not shared between connections; use a file path".into(),
            ));
        }

        let db = Builder::new_local(path).build().await?;
        let portal_db = Self { db };

        let conn = portal_db.connect().await?;
        migrations::run_migrations(&conn).await?;
        tracing::debug!(path, "database opened");
        Ok(portal_db)
    }

    /// Open a fresh connection with foreign keys enabled.
    ///
    /// The caller owns the connection; dropping it releases it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be opened.
    pub async fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Query(format!("PRAGMA foreign_keys: {e}")))?;

        Ok(conn)
    }
}
