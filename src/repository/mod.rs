pub mod forecast_repo;

pub use forecast_repo::{ForecastError, ForecastRepository, InMemoryForecastRepository};
