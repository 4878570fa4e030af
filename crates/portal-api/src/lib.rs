//! # portal-api
//!
//! HTTP surface of the language portal: paginated word, group, and study
//! session listings plus review recording, served with axum.
//!
//! [`build_router`] assembles the full application so the binary and the
//! integration tests serve the exact same routes.

pub mod error;
pub mod paging;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router: `/api/*`, `/health`, open CORS, request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_router())
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
