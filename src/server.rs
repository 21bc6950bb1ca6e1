//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::InspectService;

/// Application state shared across all handlers.
///
/// Holds only immutable configuration and the stateless inspection
/// service; the web surface keeps no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub inspector: Arc<InspectService>,
}

/// Create application state from configuration.
pub fn create_app_state(config: Arc<AppConfig>) -> AppState {
    AppState {
        config,
        inspector: Arc::new(InspectService::new()),
    }
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Face-app pages
        .route("/base", get(api::handle_base))
        .route("/", get(api::handle_index))
        .route("/faceapp", get(api::handle_faceapp))
        .route(
            "/faceapp/gender",
            get(api::handle_gender_form).post(api::handle_gender),
        )
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
