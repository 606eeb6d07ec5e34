use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let payload_limit = state.config.max_payload_size as usize;

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/results/", get(handlers::results))
        .route("/results/:id", get(handlers::result_for_id))
        // Drawing submission
        .route(
            "/postmethod",
            post(handlers::submit).layer(DefaultBodyLimit::max(payload_limit)),
        )
        // On-demand rendering
        .route("/plot/:series", get(handlers::plot))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
