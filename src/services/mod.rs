pub mod seed;

use std::sync::Arc;

use crate::config::Config;
use crate::repository::{ForecastRepository, InMemoryForecastRepository};

pub struct AppState {
    pub config: Config,
    pub forecasts: Arc<dyn ForecastRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, Arc::new(InMemoryForecastRepository::new()))
    }

    pub fn with_repository(config: Config, forecasts: Arc<dyn ForecastRepository>) -> Self {
        Self { config, forecasts }
    }
}
