use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One run of a study activity against a group of words.
///
/// `activity_name` and `group_name` come from outer joins and are `None` when
/// the referenced row no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudySession {
    pub id: i64,
    pub group_id: i64,
    pub study_activity_id: i64,
    pub activity_name: Option<String>,
    pub group_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Number of words scheduled into this session.
    pub review_items_count: i64,
}
