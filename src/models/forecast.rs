use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Divisor used for the Celsius to Fahrenheit approximation.
const CELSIUS_PER_FAHRENHEIT: f64 = 0.5556;

/// A stored weather forecast.
///
/// Fahrenheit is not a field: it is derived from `temperature_c` whenever a
/// response is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forecast {
    pub id: Uuid,
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<String>,
}

/// Create/update payload. The identifier never comes from the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    pub date: NaiveDate,
    pub temperature_c: i32,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Wire representation of a forecast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i64,
    pub summary: Option<String>,
}

impl Forecast {
    pub fn new(id: Uuid, input: ForecastInput) -> Self {
        Self {
            id,
            date: input.date,
            temperature_c: input.temperature_c,
            summary: input.summary,
        }
    }

    pub fn temperature_f(&self) -> i64 {
        fahrenheit_from_celsius(self.temperature_c)
    }
}

impl From<&Forecast> for ForecastResponse {
    fn from(forecast: &Forecast) -> Self {
        Self {
            id: forecast.id,
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            temperature_f: forecast.temperature_f(),
            summary: forecast.summary.clone(),
        }
    }
}

impl From<Forecast> for ForecastResponse {
    fn from(forecast: Forecast) -> Self {
        let temperature_f = forecast.temperature_f();
        Self {
            id: forecast.id,
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            temperature_f,
            summary: forecast.summary,
        }
    }
}

/// `32 + round(c / 0.5556)`, rounding half away from zero.
///
/// Widened to `i64`: the result leaves the `i32` range for large inputs.
pub fn fahrenheit_from_celsius(celsius: i32) -> i64 {
    32 + (f64::from(celsius) / CELSIUS_PER_FAHRENHEIT).round() as i64
}
