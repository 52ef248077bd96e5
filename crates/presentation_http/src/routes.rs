//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page and static assets
        .route("/", get(handlers::page::index))
        .route("/assets/app.js", get(handlers::page::app_js))
        .route("/assets/marker.svg", get(handlers::page::marker_svg))
        // Health
        .route("/health", get(handlers::health::health_check))
        // Roulette API (v1)
        .route("/v1/map", get(handlers::map::map_settings))
        .route("/v1/controls/highway", get(handlers::controls::highway_control))
        .route("/v1/search", post(handlers::search::search))
        // Attach state
        .with_state(state)
}
