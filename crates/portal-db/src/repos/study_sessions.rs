//! Study session repository.
//!
//! Sessions carry a read-time `review_items_count` and are listed newest
//! first. Session word listings scope their review counts to the session.

use portal_core::entities::{StudySession, Word};
use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;
use portal_core::pagination::{PageRequest, Paginated};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::pagination::fetch_page;
use crate::repos::words::{WORD_COLS, row_to_word};
use crate::service::PortalService;

/// Session columns followed by the scheduled-item count. Pair with [`SESSION_FROM`].
pub(crate) const SESSION_COLS: &str = "ss.id, ss.group_id, ss.study_activity_id,
       sa.name AS activity_name, g.name AS group_name, ss.created_at AS start_time,
       COUNT(wri.id) AS review_items_count";

/// Outer joins for names and review items. Callers add `WHERE`/`GROUP BY ss.id`.
pub(crate) const SESSION_FROM: &str = "FROM study_sessions ss
       LEFT JOIN study_activities sa ON sa.id = ss.study_activity_id
       LEFT JOIN groups g ON g.id = ss.group_id
       LEFT JOIN word_review_items wri ON wri.study_session_id = ss.id";

pub(crate) fn row_to_session(row: &libsql::Row) -> Result<StudySession, DatabaseError> {
    Ok(StudySession {
        id: row.get(0)?,
        group_id: row.get(1)?,
        study_activity_id: row.get(2)?,
        activity_name: get_opt_string(row, 3)?,
        group_name: get_opt_string(row, 4)?,
        start_time: parse_datetime(&row.get::<String>(5)?)?,
        end_time: None,
        review_items_count: row.get(6)?,
    })
}

impl PortalService {
    /// List all study sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn list_study_sessions(
        &self,
        request: PageRequest,
    ) -> Result<Paginated<StudySession>, DatabaseError> {
        tracing::debug!(
            page = request.page(),
            page_size = request.page_size(),
            "listing study sessions"
        );
        let conn = self.db().connect().await?;

        let select = format!(
            "SELECT {SESSION_COLS}
             {SESSION_FROM}
             GROUP BY ss.id
             ORDER BY ss.created_at DESC, ss.id DESC"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM study_sessions",
            &select,
            Vec::new(),
            request,
            row_to_session,
        )
        .await
    }

    /// Get a study session by ID.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the session does not exist.
    pub async fn get_study_session(&self, id: i64) -> Result<StudySession, DatabaseError> {
        let conn = self.db().connect().await?;

        let sql = format!(
            "SELECT {SESSION_COLS}
             {SESSION_FROM}
             WHERE ss.id = ?1
             GROUP BY ss.id"
        );
        let mut rows = conn.query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::StudySession, id))?;
        row_to_session(&row)
    }

    /// List the words scheduled into a session.
    ///
    /// Review counts only cover outcomes recorded in this session.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the session does not exist.
    pub async fn list_session_words(
        &self,
        session_id: i64,
        request: PageRequest,
    ) -> Result<Paginated<Word>, DatabaseError> {
        let conn = self.db().connect().await?;
        Self::ensure_exists(&conn, EntityKind::StudySession, session_id).await?;

        let select = format!(
            "SELECT {WORD_COLS}
             FROM words w
             JOIN word_review_items wri ON wri.word_id = w.id AND wri.study_session_id = ?1
             LEFT JOIN word_reviews wr ON wr.word_id = w.id AND wr.study_session_id = ?1
             GROUP BY w.id
             ORDER BY w.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM word_review_items WHERE study_session_id = ?1",
            &select,
            vec![session_id.into()],
            request,
            row_to_word,
        )
        .await
    }
}
