//! Read-time review aggregation.
//!
//! Correct/wrong counters are never stored. Every read recomputes them from
//! the `word_reviews` event log. The store does this in SQL with a grouped
//! conditional `SUM`; this module holds the equivalent in-memory fold for
//! callers that already have the events loaded.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Derived correct/wrong counts for one entity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ReviewCounts {
    pub correct_count: i64,
    pub wrong_count: i64,
}

impl ReviewCounts {
    #[must_use]
    pub const fn new(correct_count: i64, wrong_count: i64) -> Self {
        Self {
            correct_count,
            wrong_count,
        }
    }

    /// Count one outcome.
    pub const fn record(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
    }

    /// Total number of review events counted.
    #[must_use]
    pub const fn total(self) -> i64 {
        self.correct_count + self.wrong_count
    }
}

/// A single review outcome keyed by the entity it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEvent {
    pub entity_id: i64,
    pub correct: bool,
}

/// Pair every row with its review counts.
///
/// `key` extracts the entity id each event is matched against. Rows without
/// events get `ReviewCounts::default()` (`0, 0`); events for ids with no row
/// are ignored. Row order is preserved.
pub fn with_review_aggregates<E>(
    rows: Vec<E>,
    events: impl IntoIterator<Item = ReviewEvent>,
    key: impl Fn(&E) -> i64,
) -> Vec<(E, ReviewCounts)> {
    let mut by_entity: HashMap<i64, ReviewCounts> = HashMap::new();
    for event in events {
        by_entity
            .entry(event.entity_id)
            .or_default()
            .record(event.correct);
    }

    rows.into_iter()
        .map(|row| {
            let counts = by_entity.get(&key(&row)).copied().unwrap_or_default();
            (row, counts)
        })
        .collect()
}
