//! `/api/words` handlers.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use portal_core::entities::{Group, Word};
use portal_core::pagination::Paginated;

use crate::error::ApiError;
use crate::paging::{PageQuery, check_empty};
use crate::state::AppState;

pub async fn list_words(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<Word>>, ApiError> {
    let Query(query) = query?;
    let request = query.resolve(&state.paging)?;
    let page = state.svc.list_words(request).await?;
    Ok(Json(check_empty(page, "words", &state.paging)?))
}

pub async fn get_word(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Word>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.svc.get_word(id).await?))
}

pub async fn list_word_groups(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<Group>>, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let request = query.resolve(&state.paging)?;
    let page = state.svc.list_word_groups(id, request).await?;
    Ok(Json(check_empty(page, "groups", &state.paging)?))
}
