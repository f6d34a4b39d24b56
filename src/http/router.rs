//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
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

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Timetable lifecycle
        .route("/scheduling/generate", post(handlers::generate_schedule))
        .route(
            "/scheduling/batches/{batch_id}/approve",
            post(handlers::approve_schedule),
        )
        .route(
            "/scheduling/batches/{batch_id}/reject",
            post(handlers::reject_schedule),
        )
        // Listings
        .route("/scheduling/drafts", get(handlers::list_drafts))
        .route("/scheduling/active", get(handlers::list_active))
        .route(
            "/scheduling/instructor/{instructor_id}",
            get(handlers::get_instructor_schedule),
        )
        .route(
            "/scheduling/instructor/{instructor_id}/calendar",
            get(handlers::get_instructor_calendar),
        )
        .route("/scheduling/{schedule_id}", get(handlers::get_schedule_detail))
        // Conflict probe
        .route("/scheduling/conflicts/check", post(handlers::check_overlap))
        // Analytics
        .route(
            "/analytics/utilization",
            get(handlers::get_classroom_utilization),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
