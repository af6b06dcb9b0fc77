use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::services::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub forecasts: usize,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        forecasts: state.forecasts.count().await,
    })
}
