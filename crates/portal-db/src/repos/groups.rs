//! Group repository: listings with read-time word counts, plus the words and
//! study sessions belonging to a group.

use portal_core::entities::{Group, StudySession, Word};
use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;
use portal_core::pagination::{PageRequest, Paginated};

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::pagination::fetch_page;
use crate::repos::study_sessions::{SESSION_COLS, SESSION_FROM, row_to_session};
use crate::repos::words::{WORD_COLS, row_to_word};
use crate::service::PortalService;

/// Group columns followed by the association count.
///
/// Must be paired with `LEFT JOIN word_groups wg ON wg.group_id = g.id GROUP BY g.id`.
pub(crate) const GROUP_COLS: &str = "g.id, g.name, g.description, COUNT(wg.id) AS word_count";

pub(crate) fn row_to_group(row: &libsql::Row) -> Result<Group, DatabaseError> {
    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        description: get_opt_string(row, 2)?,
        word_count: row.get(3)?,
    })
}

impl PortalService {
    /// List all groups, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn list_groups(
        &self,
        request: PageRequest,
    ) -> Result<Paginated<Group>, DatabaseError> {
        tracing::debug!(
            page = request.page(),
            page_size = request.page_size(),
            "listing groups"
        );
        let conn = self.db().connect().await?;

        let select = format!(
            "SELECT {GROUP_COLS}
             FROM groups g
             LEFT JOIN word_groups wg ON wg.group_id = g.id
             GROUP BY g.id
             ORDER BY g.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM groups",
            &select,
            Vec::new(),
            request,
            row_to_group,
        )
        .await
    }

    /// Get a group by ID with its word count.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the group does not exist.
    pub async fn get_group(&self, id: i64) -> Result<Group, DatabaseError> {
        let conn = self.db().connect().await?;

        let sql = format!(
            "SELECT {GROUP_COLS}
             FROM groups g
             LEFT JOIN word_groups wg ON wg.group_id = g.id
             WHERE g.id = ?1
             GROUP BY g.id"
        );
        let mut rows = conn.query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Group, id))?;
        row_to_group(&row)
    }

    /// List the words in a group, with review counts over every session.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the group does not exist.
    pub async fn list_group_words(
        &self,
        group_id: i64,
        request: PageRequest,
    ) -> Result<Paginated<Word>, DatabaseError> {
        let conn = self.db().connect().await?;
        Self::ensure_exists(&conn, EntityKind::Group, group_id).await?;

        let select = format!(
            "SELECT {WORD_COLS}
             FROM words w
             JOIN word_groups wg ON wg.word_id = w.id AND wg.group_id = ?1
             LEFT JOIN word_reviews wr ON wr.word_id = w.id
             GROUP BY w.id
             ORDER BY w.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM word_groups WHERE group_id = ?1",
            &select,
            vec![group_id.into()],
            request,
            row_to_word,
        )
        .await
    }

    /// List the study sessions run against a group, newest first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the group does not exist.
    pub async fn list_group_study_sessions(
        &self,
        group_id: i64,
        request: PageRequest,
    ) -> Result<Paginated<StudySession>, DatabaseError> {
        let conn = self.db().connect().await?;
        Self::ensure_exists(&conn, EntityKind::Group, group_id).await?;

        let select = format!(
            "SELECT {SESSION_COLS}
             {SESSION_FROM}
             WHERE ss.group_id = ?1
             GROUP BY ss.id
             ORDER BY ss.created_at DESC, ss.id DESC"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM study_sessions WHERE group_id = ?1",
            &select,
            vec![group_id.into()],
            request,
            row_to_session,
        )
        .await
    }
}
