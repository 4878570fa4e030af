//! Route table.
//!
//! ```text
//! /health                                          liveness
//! /api/words[/:id[/groups]]
//! /api/groups[/:id[/words | /study_sessions]]
//! /api/study_sessions[/:id[/words | /reviews]]
//! /api/study_sessions/:id/words/:word_id/review    POST
//! ```

pub mod groups;
pub mod study_sessions;
pub mod words;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::state::AppState;

pub(crate) fn api_router() -> Router<AppState> {
    Router::new()
        .route("/words", get(words::list_words))
        .route("/words/:id", get(words::get_word))
        .route("/words/:id/groups", get(words::list_word_groups))
        .route("/groups", get(groups::list_groups))
        .route("/groups/:id", get(groups::get_group))
        .route("/groups/:id/words", get(groups::list_group_words))
        .route(
            "/groups/:id/study_sessions",
            get(groups::list_group_study_sessions),
        )
        .route("/study_sessions", get(study_sessions::list_study_sessions))
        .route("/study_sessions/:id", get(study_sessions::get_study_session))
        .route(
            "/study_sessions/:id/words",
            get(study_sessions::list_session_words),
        )
        .route(
            "/study_sessions/:id/reviews",
            get(study_sessions::list_session_reviews),
        )
        .route(
            "/study_sessions/:id/words/:word_id/review",
            post(study_sessions::record_review),
        )
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
