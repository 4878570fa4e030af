//! Cross-cutting error types for the language portal.
//!
//! These are the logical failure conditions of the query layer. Storage
//! failures live in `portal-db::error::DatabaseError`; the HTTP status each
//! condition maps to is decided in `portal-api`.

use thiserror::Error;

use crate::enums::EntityKind;

/// Logical errors surfaced by portal operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested word, group, or study session does not exist.
    #[error("{entity} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// A listing query succeeded but matched zero rows.
    ///
    /// Only raised when the empty-page policy treats empty listings as
    /// missing resources.
    #[error("No {resource} found")]
    EmptyResult { resource: String },

    /// A review was attempted for a word that was never scheduled into the session.
    #[error("Word is not part of this study session")]
    InvalidAssociation { session_id: i64, word_id: i64 },

    /// Request parameters failed validation (e.g. paging bounds).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Convenience constructor for [`CoreError::NotFound`].
    #[must_use]
    pub const fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_entity() {
        assert_eq!(
            CoreError::not_found(EntityKind::Word, 9999).to_string(),
            "Word not found"
        );
        assert_eq!(
            CoreError::not_found(EntityKind::Group, 1).to_string(),
            "Group not found"
        );
        assert_eq!(
            CoreError::not_found(EntityKind::StudySession, 1).to_string(),
            "Study session not found"
        );
    }

    #[test]
    fn invalid_association_message_is_distinct() {
        let err = CoreError::InvalidAssociation {
            session_id: 1,
            word_id: 2,
        };
        assert_eq!(err.to_string(), "Word is not part of this study session");
    }

    #[test]
    fn empty_result_names_the_resource() {
        let err = CoreError::EmptyResult {
            resource: "groups".into(),
        };
        assert_eq!(err.to_string(), "No groups found");
    }
}
