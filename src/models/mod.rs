pub mod forecast;

pub use forecast::{Forecast, ForecastInput, ForecastResponse};
