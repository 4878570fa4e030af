use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::ReviewCounts;

/// A vocabulary entry with its read-time review counters.
///
/// `parts` is free-form structured metadata stored as JSON
/// (typically `{ "type": "noun", "usage": "..." }`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub jamaican_patois: String,
    pub english: String,
    pub parts: Option<serde_json::Value>,
    #[serde(flatten)]
    pub reviews: ReviewCounts,
}
