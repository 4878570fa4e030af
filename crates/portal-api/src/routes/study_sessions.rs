//! `/api/study_sessions` handlers, including review recording.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use portal_core::entities::{StudySession, Word, WordReview};
use portal_core::pagination::Paginated;
use serde::Deserialize;

use crate::error::ApiError;
use crate::paging::{PageQuery, check_empty};
use crate::state::AppState;

/// Body of `POST /study_sessions/{id}/words/{word_id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    pub correct: bool,
}

pub async fn list_study_sessions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<StudySession>>, ApiError> {
    let Query(query) = query?;
    let request = query.resolve(&state.paging)?;
    let page = state.svc.list_study_sessions(request).await?;
    Ok(Json(check_empty(page, "study sessions", &state.paging)?))
}

pub async fn get_study_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudySession>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.svc.get_study_session(id).await?))
}

pub async fn list_session_words(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<Word>>, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let request = query.resolve(&state.paging)?;
    let page = state.svc.list_session_words(id, request).await?;
    Ok(Json(check_empty(page, "words", &state.paging)?))
}

pub async fn list_session_reviews(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<WordReview>>, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let request = query.resolve(&state.paging)?;
    let page = state.svc.list_session_reviews(id, request).await?;
    Ok(Json(check_empty(page, "reviews", &state.paging)?))
}

pub async fn record_review(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
    body: Result<Json<ReviewBody>, JsonRejection>,
) -> Result<Json<WordReview>, ApiError> {
    let Path((session_id, word_id)) = ids?;
    let Json(body) = body?;
    let review = state
        .svc
        .record_review(session_id, word_id, body.correct)
        .await?;
    Ok(Json(review))
}
