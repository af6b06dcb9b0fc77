//! Sample data inserted once at startup.

use anyhow::Context;
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::Forecast;
use crate::repository::ForecastRepository;

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

pub const MIN_SEED_TEMPERATURE_C: i32 = -20;
pub const MAX_SEED_TEMPERATURE_C: i32 = 55;

/// Builds `count` forecasts dated `today + 1 ..= today + count` days.
pub fn build_seed_forecasts<R: Rng + ?Sized>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> anyhow::Result<Vec<Forecast>> {
    (1..=count as u64)
        .map(|offset| -> anyhow::Result<Forecast> {
            let date = today
                .checked_add_days(Days::new(offset))
                .with_context(|| format!("seed date out of range: {today} + {offset} days"))?;

            Ok(Forecast {
                id: Uuid::new_v4(),
                date,
                temperature_c: rng.gen_range(MIN_SEED_TEMPERATURE_C..MAX_SEED_TEMPERATURE_C),
                summary: SUMMARIES.choose(&mut *rng).map(|s| s.to_string()),
            })
        })
        .collect()
}

/// Inserts freshly built sample forecasts into `repo` and returns them.
pub async fn seed_forecasts<R: Rng + ?Sized>(
    repo: &dyn ForecastRepository,
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> anyhow::Result<Vec<Forecast>> {
    let forecasts = build_seed_forecasts(count, today, rng)?;

    for forecast in &forecasts {
        tracing::debug!(id = %forecast.id, date = %forecast.date, "Seeding forecast");
        repo.insert(forecast.clone()).await;
    }

    tracing::info!(count = forecasts.len(), "Seeded sample forecasts");
    Ok(forecasts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryForecastRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_seed_dates_follow_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let forecasts = build_seed_forecasts(3, today(), &mut rng).unwrap();

        let dates: Vec<_> = forecasts.iter().map(|f| f.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-07-01", "2025-07-02", "2025-07-03"]);
    }

    #[test]
    fn test_seed_values_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let forecasts = build_seed_forecasts(200, today(), &mut rng).unwrap();

        for forecast in &forecasts {
            assert!(forecast.temperature_c >= MIN_SEED_TEMPERATURE_C);
            assert!(forecast.temperature_c < MAX_SEED_TEMPERATURE_C);
            let summary = forecast.summary.as_deref().unwrap();
            assert!(SUMMARIES.contains(&summary), "unexpected summary {summary}");
        }
    }

    #[test]
    fn test_seed_is_deterministic_for_fixed_rng() {
        let first = build_seed_forecasts(5, today(), &mut StdRng::seed_from_u64(1)).unwrap();
        let second = build_seed_forecasts(5, today(), &mut StdRng::seed_from_u64(1)).unwrap();

        let strip = |fs: &[Forecast]| {
            fs.iter()
                .map(|f| (f.date, f.temperature_c, f.summary.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&first), strip(&second));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let forecasts = build_seed_forecasts(50, today(), &mut rng).unwrap();
        let ids: std::collections::HashSet<_> = forecasts.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_seed_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(build_seed_forecasts(0, today(), &mut rng).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_forecasts_fills_repository() {
        let repo = InMemoryForecastRepository::new();
        let mut rng = StdRng::seed_from_u64(9);

        let seeded = seed_forecasts(&repo, 3, today(), &mut rng).await.unwrap();

        assert_eq!(repo.count().await, 3);
        assert_eq!(repo.list().await, seeded);
    }
}
