//! # portal-core
//!
//! Core types shared across all language-portal crates:
//! - Entity structs for words, groups, study sessions, and word reviews
//! - Offset/limit pagination arithmetic and the paginated response envelope
//! - Read-time review aggregation (correct/wrong counts)
//! - The cross-cutting error taxonomy (not found, empty result, invalid association)

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod pagination;
