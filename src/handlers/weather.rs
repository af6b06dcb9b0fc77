use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppError;
use crate::models::{Forecast, ForecastInput, ForecastResponse};
use crate::services::AppState;

pub async fn list_forecasts(State(state): State<Arc<AppState>>) -> Json<Vec<ForecastResponse>> {
    let forecasts = state.forecasts.list().await;
    Json(forecasts.into_iter().map(ForecastResponse::from).collect())
}

pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ForecastResponse>, AppError> {
    let forecast = state.forecasts.get_by_id(id).await?;
    Ok(Json(forecast.into()))
}

pub async fn create_forecast(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ForecastInput>,
) -> impl IntoResponse {
    let forecast = Forecast::new(Uuid::new_v4(), input);
    let location = format!("/weather/{}", forecast.id);

    let response = ForecastResponse::from(&forecast);

    tracing::info!(id = %forecast.id, date = %forecast.date, "Created forecast");
    state.forecasts.insert(forecast).await;

    (StatusCode::CREATED, [(header::LOCATION, location)], Json(response))
}

pub async fn update_forecast(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<ForecastInput>,
) -> Result<Json<ForecastResponse>, AppError> {
    let updated = state
        .forecasts
        .replace_by_id(id, Forecast::new(id, input))
        .await?;

    tracing::info!(id = %id, "Updated forecast");
    Ok(Json(updated.into()))
}
