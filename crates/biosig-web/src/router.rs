//! Axum router — maps all URL paths to handlers.

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    api::{api_biosignatures, api_types, health},
    page::{index, not_found, results_partial},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                 get(index))
        .route("/partials/results", get(results_partial))

        // API endpoints
        .route("/api/types",          get(api_types))
        .route("/api/biosignatures",  get(api_biosignatures))
        .route("/health",             get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
