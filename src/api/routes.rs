//! Shared state and router construction.
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::config::Config;
use crate::service::GhibliArtService;

pub struct AppState {
    pub service: GhibliArtService,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState { service: GhibliArtService::from_config(config) }
    }
}

pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/v1/generate", post(handlers::generate_from_image))
        .route("/api/v1/generate-from-text", post(handlers::generate_from_text))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
