//! Entity kinds addressable through the portal API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of entity a lookup or existence check refers to.
///
/// `Display` yields the human-facing label used in error details
/// (e.g. `"Study session not found"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Word,
    Group,
    StudySession,
}

impl EntityKind {
    /// Return the snake_case identifier used in logs and serialized errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Group => "group",
            Self::StudySession => "study_session",
        }
    }

    /// Human-facing label, capitalised for the start of a sentence.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Word => "Word",
            Self::Group => "Group",
            Self::StudySession => "Study session",
        }
    }

    /// SQL table holding rows of this kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Word => "words",
            Self::Group => "groups",
            Self::StudySession => "study_sessions",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
