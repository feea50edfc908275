//! Router configuration for the web shell.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::context::AppContext;

/// Create the application router with all routes and request tracing.
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/schedule", post(handlers::submit_schedule))
        .route("/schedule.ics", post(handlers::download_calendar))
        .route("/api/schedule", post(handlers::api_schedule))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
