//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing and accept every timestamp
//! shape that reaches the database: `SQLite`'s `datetime('now')` default,
//! Rust's `to_rfc3339()`, and naive ISO 8601 from seed tools.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DatabaseError;

/// Naive layouts read as UTC. `%.f` also matches a missing fraction.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles RFC 3339 (`"2026-02-09T14:30:00+00:00"`), `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`), and naive ISO 8601 with or without
/// fractional seconds (`"2026-02-09T14:30:00.123456"`). Naive values are UTC.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches none of these formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let mut last_error = None;
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(s, format) {
            Ok(naive) => return Ok(naive.and_utc()),
            Err(e) => last_error = Some(e),
        }
    }
    let reason = last_error.map_or_else(String::new, |e| e.to_string());
    Err(DatabaseError::Query(format!(
        "Failed to parse datetime '{s}': {reason}"
    )))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Extract an optional JSON value from a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<serde_json::Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let val = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))?;
            Ok(Some(val))
        }
        _ => Ok(None),
    }
}

/// Convert a `COUNT(*)` result to `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative count.
pub fn count_to_u64(count: i64) -> Result<u64, DatabaseError> {
    u64::try_from(count)
        .map_err(|_| DatabaseError::InvalidState(format!("negative row count: {count}")))
}
