use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::suggestion::SuggestionModel;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<SuggestionModel>,
}

impl AppState {
    pub fn new(model: SuggestionModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::predict::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
