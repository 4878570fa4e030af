//! Review event log: recording outcomes and listing them per session.
//!
//! A review may only be recorded for a word already scheduled into the
//! session. The existence checks and the insert share one immediate
//! transaction so the association cannot vanish between check and write.

use chrono::Utc;
use libsql::{Connection, TransactionBehavior};
use portal_core::entities::WordReview;
use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;
use portal_core::pagination::{PageRequest, Paginated};

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_datetime};
use crate::pagination::fetch_page;
use crate::service::PortalService;

/// Review columns joined with the reviewed word's text.
const REVIEW_SELECT: &str = "SELECT wr.id, wr.word_id, wr.study_session_id, wr.correct, wr.created_at,
       w.jamaican_patois, w.english
       FROM word_reviews wr
       JOIN words w ON w.id = wr.word_id";

fn row_to_review(row: &libsql::Row) -> Result<WordReview, DatabaseError> {
    Ok(WordReview {
        id: row.get(0)?,
        word_id: row.get(1)?,
        study_session_id: row.get(2)?,
        correct: get_bool(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        word_jamaican_patois: row.get(5)?,
        word_english: row.get(6)?,
    })
}

impl PortalService {
    /// Record one review outcome for a word scheduled into a session.
    ///
    /// Checks run in order: session, word, association. The first failing
    /// check decides the error and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for a missing session or word,
    /// `CoreError::InvalidAssociation` (wrapped) if the word is not scheduled
    /// into the session, or `DatabaseError` if a query fails.
    pub async fn record_review(
        &self,
        session_id: i64,
        word_id: i64,
        correct: bool,
    ) -> Result<WordReview, DatabaseError> {
        let conn = self.db().connect().await?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;

        match insert_review(&tx, session_id, word_id, correct).await {
            Ok(review) => {
                tx.commit().await?;
                tracing::debug!(
                    review_id = review.id,
                    session_id,
                    word_id,
                    correct,
                    "review recorded"
                );
                Ok(review)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "review rollback failed");
                }
                Err(error)
            }
        }
    }

    /// List the reviews recorded in a session, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the session does not exist.
    pub async fn list_session_reviews(
        &self,
        session_id: i64,
        request: PageRequest,
    ) -> Result<Paginated<WordReview>, DatabaseError> {
        let conn = self.db().connect().await?;
        Self::ensure_exists(&conn, EntityKind::StudySession, session_id).await?;

        let select = format!(
            "{REVIEW_SELECT}
             WHERE wr.study_session_id = ?1
             ORDER BY wr.created_at, wr.id"
        );
        fetch_page(
            &conn,
            "SELECT COUNT(*) FROM word_reviews WHERE study_session_id = ?1",
            &select,
            vec![session_id.into()],
            request,
            row_to_review,
        )
        .await
    }
}

async fn insert_review(
    conn: &Connection,
    session_id: i64,
    word_id: i64,
    correct: bool,
) -> Result<WordReview, DatabaseError> {
    PortalService::ensure_exists(conn, EntityKind::StudySession, session_id).await?;
    PortalService::ensure_exists(conn, EntityKind::Word, word_id).await?;

    let mut rows = conn
        .query(
            "SELECT 1 FROM word_review_items WHERE study_session_id = ?1 AND word_id = ?2",
            libsql::params![session_id, word_id],
        )
        .await?;
    if rows.next().await?.is_none() {
        tracing::debug!(session_id, word_id, "word not scheduled into session");
        return Err(CoreError::InvalidAssociation {
            session_id,
            word_id,
        }
        .into());
    }

    conn.execute(
        "INSERT INTO word_reviews (word_id, study_session_id, correct, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![word_id, session_id, i64::from(correct), Utc::now().to_rfc3339()],
    )
    .await?;
    let review_id = conn.last_insert_rowid();

    let sql = format!("{REVIEW_SELECT} WHERE wr.id = ?1");
    let mut rows = conn.query(&sql, [review_id]).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_review(&row)
}
