use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Titles that may be logged
        .route("/catalog", get(handlers::get_catalog))
        // Watch log
        .route("/entries", get(handlers::get_entries))
        .route("/entries", post(handlers::add_entry))
        // Derived views
        .route("/stats", get(handlers::get_stats))
        .route("/recommendation", get(handlers::get_recommendation))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
