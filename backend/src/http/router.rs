//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dataset summary
        .route("/dataset", get(handlers::get_dataset_info))
        // Dashboard endpoints
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/monthly", get(handlers::get_monthly))
        .route("/dashboard/seasons", get(handlers::get_seasons))
        .route("/dashboard/weather", get(handlers::get_weather));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let dataset = Arc::new(Dataset::from_records(vec![]));
        let state = AppState::new(dataset);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
