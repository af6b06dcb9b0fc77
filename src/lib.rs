pub mod config;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/weather",
            get(handlers::weather::list_forecasts).post(handlers::weather::create_forecast),
        )
        .route(
            "/weather/:id",
            get(handlers::weather::get_forecast).put(handlers::weather::update_forecast),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
