use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Forecast;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Forecast not found: {0}")]
    NotFound(Uuid),
}

/// Identity-keyed access to forecasts.
///
/// Implementations must keep insertion order for `list` and must treat
/// `replace_by_id` as a single atomic step.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    async fn list(&self) -> Vec<Forecast>;

    async fn get_by_id(&self, id: Uuid) -> Result<Forecast, ForecastError>;

    /// Appends a forecast. The caller is responsible for a fresh `id`.
    async fn insert(&self, forecast: Forecast);

    /// Removes the forecast with `id` and appends `forecast` under the same id.
    async fn replace_by_id(&self, id: Uuid, forecast: Forecast) -> Result<Forecast, ForecastError>;

    async fn count(&self) -> usize;
}

/// Records keyed by id, listed by insertion sequence.
///
/// Every write takes a fresh sequence number, so moving a record to the end
/// is a keyed remove and insert on `order`.
#[derive(Default)]
struct Inner {
    records: HashMap<Uuid, (u64, Forecast)>,
    order: BTreeMap<u64, Uuid>,
    next_seq: u64,
}

impl Inner {
    fn put(&mut self, forecast: Forecast) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let id = forecast.id;
        if let Some((old_seq, _)) = self.records.insert(id, (seq, forecast)) {
            self.order.remove(&old_seq);
        }
        self.order.insert(seq, id);
    }
}

/// Process-lifetime store guarded by a single lock.
#[derive(Default)]
pub struct InMemoryForecastRepository {
    inner: RwLock<Inner>,
}

impl InMemoryForecastRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ForecastRepository for InMemoryForecastRepository {
    async fn list(&self) -> Vec<Forecast> {
        let inner = self.inner.read();
        inner
            .order
            .values()
            .filter_map(|id| inner.records.get(id).map(|(_, f)| f.clone()))
            .collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Forecast, ForecastError> {
        self.inner
            .read()
            .records
            .get(&id)
            .map(|(_, f)| f.clone())
            .ok_or(ForecastError::NotFound(id))
    }

    async fn insert(&self, forecast: Forecast) {
        self.inner.write().put(forecast);
    }

    async fn replace_by_id(
        &self,
        id: Uuid,
        mut forecast: Forecast,
    ) -> Result<Forecast, ForecastError> {
        let mut inner = self.inner.write();
        if !inner.records.contains_key(&id) {
            return Err(ForecastError::NotFound(id));
        }

        forecast.id = id;
        inner.put(forecast.clone());

        Ok(forecast)
    }

    async fn count(&self) -> usize {
        self.inner.read().records.len()
    }
}
