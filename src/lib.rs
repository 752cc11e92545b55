pub mod certificate;
pub mod config;
pub mod export;
pub mod pdf;
pub mod prompt;
pub mod routes;
pub mod state;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: state::AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(routes::index))
        .route("/generate", post(routes::generate))
        .route("/update", post(routes::update))
        .route("/api/extract", post(routes::extract))
        .route("/download/:format", post(routes::download))
        .nest_service("/static", tower_http::services::ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
