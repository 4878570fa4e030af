//! Word repository: listings and lookups with read-time review counts.

use portal_core::aggregate::ReviewCounts;
use portal_core::entities::{Group, Word};
use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;
use portal_core::pagination::{PageRequest, Paginated};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_optional_json};
use crate::pagination::fetch_page;
use crate::repos::groups::{GROUP_COLS, row_to_group};
use crate::service::PortalService;

/// Word columns followed by the two conditional review counts.
///
/// Must be paired with `LEFT JOIN word_reviews wr ... GROUP BY w.id`; the
/// `COALESCE` turns the all-NULL outer-join row of an unreviewed word into `0`.
pub(crate) const WORD_COLS: &str = "w.id, w.jamaican_patois, w.english, w.parts,
       COALESCE(SUM(CASE WHEN wr.correct = 1 THEN 1 ELSE 0 END), 0) AS correct_count,
       COALESCE(SUM(CASE WHEN wr.correct = 0 THEN 1 ELSE 0 END), 0) AS wrong_count";

pub(crate) fn row_to_word(row: &libsql::Row) -> Result<Word, DatabaseError> {
    Ok(Word {
        id: row.get(0)?,
        jamaican_patois: row.get(1)?,
        english: row.get(2)?,
        parts: parse_optional_json(get_opt_string(row, 3)?.as_deref())?,
        reviews: ReviewCounts::new(row.get(4)?, row.get(5)?),
    })
}

impl PortalService {
    /// List all words, ordered by id, with review counts over every session.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn list_words(&self, request: PageRequest) -> Result<Paginated<Word>, DatabaseError> {
        tracing::debug!(
            page = request.page(),
            page_size = request.page_size(),
            "listing words"
        );
        let conn = self.db().connect().await?;

        let select = format!(
            "SELECT {WORD_COLS}
             FROM words w
             LEFT JOIN word_reviews wr ON wr.word_id = w.id
             GROUP BY w.id
             ORDER BY w.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM words",
            &select,
            Vec::new(),
            request,
            row_to_word,
        )
        .await
    }

    /// Get a word by ID with its review counts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the word does not exist.
    pub async fn get_word(&self, id: i64) -> Result<Word, DatabaseError> {
        let conn = self.db().connect().await?;

        let sql = format!(
            "SELECT {WORD_COLS}
             FROM words w
             LEFT JOIN word_reviews wr ON wr.word_id = w.id
             WHERE w.id = ?1
             GROUP BY w.id"
        );
        let mut rows = conn.query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Word, id))?;
        row_to_word(&row)
    }

    /// List the groups a word belongs to.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the word does not exist.
    pub async fn list_word_groups(
        &self,
        word_id: i64,
        request: PageRequest,
    ) -> Result<Paginated<Group>, DatabaseError> {
        let conn = self.db().connect().await?;
        Self::ensure_exists(&conn, EntityKind::Word, word_id).await?;

        let select = format!(
            "SELECT {GROUP_COLS}
             FROM groups g
             JOIN word_groups member ON member.group_id = g.id AND member.word_id = ?1
             LEFT JOIN word_groups wg ON wg.group_id = g.id
             GROUP BY g.id
             ORDER BY g.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM word_groups WHERE word_id = ?1",
            &select,
            vec![word_id.into()],
            request,
            row_to_group,
        )
        .await
    }
}
