//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
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

    // Allow large solver payloads during uploads.
    let body_limit = state.config.server.max_body_bytes;

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Instance lifecycle
        .route("/instances", get(handlers::list_instances))
        .route("/instances", post(handlers::upload_instance))
        .route("/instances/{instance_id}", get(handlers::get_instance))
        .route("/instances/{instance_id}", delete(handlers::delete_instance))
        // Depot endpoints
        .route(
            "/instances/{instance_id}/depots",
            get(handlers::get_depot_overview),
        )
        .route(
            "/instances/{instance_id}/depots/{depot_id}/loads",
            get(handlers::get_depot_loads),
        )
        // Chart catalog
        .route("/instances/{instance_id}/charts", get(handlers::get_charts));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
