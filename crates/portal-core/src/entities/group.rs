use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named collection of words.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Number of word-to-group associations.
    pub word_count: i64,
}
