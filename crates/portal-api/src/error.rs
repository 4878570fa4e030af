//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"detail": "<message>"}` with a status
//! chosen from the logical error. Storage failures become 500 and keep their
//! message out of the body.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal_core::errors::CoreError;
use portal_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Query string could not be deserialized (e.g. `page=abc`).
    #[error("Validation error: {0}")]
    Query(#[from] QueryRejection),

    /// Path segment is not an integer id.
    #[error("Validation error: {0}")]
    Path(#[from] PathRejection),

    /// Request body is missing, malformed, or has the wrong shape.
    #[error("{0}")]
    Body(#[from] JsonRejection),
}

const fn core_status(error: &CoreError) -> StatusCode {
    match error {
        CoreError::NotFound { .. } | CoreError::EmptyResult { .. } => StatusCode::NOT_FOUND,
        CoreError::InvalidAssociation { .. } => StatusCode::BAD_REQUEST,
        CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    /// The logical error behind this failure, if any.
    fn core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(core) => Some(core),
            Self::Database(db) => db.as_core(),
            Self::Query(_) | Self::Path(_) | Self::Body(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match (self, self.core()) {
            (_, Some(core)) => core_status(core),
            (Self::Query(_) | Self::Path(_), None) => StatusCode::UNPROCESSABLE_ENTITY,
            (Self::Body(rejection), None) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
            self.to_string()
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
