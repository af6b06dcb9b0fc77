pub mod health;
pub mod weather;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repository::ForecastError;

#[derive(Debug)]
pub struct AppError(ForecastError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ForecastError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}
