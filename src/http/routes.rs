//! HTTP API route definitions

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, AppState};

/// Create the API router.
///
/// The scan endpoint lives at the root path, matching the original service
/// interface consumed by existing clients.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::scan))
        .route("/health", get(handlers::health))
        .with_state(state)
}
