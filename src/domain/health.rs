//! Device health-data types: daily aggregates, raw samples, dashboard views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A reporting device, unique per (user, device_uuid).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Device {
    pub id: i64,
    pub user_id: i64,
    pub device_uuid: String,
    pub source: String,
    pub platform: Option<String>,
    pub model: Option<String>,
    pub last_seen_at: DateTime<Utc>,
}

/// Daily aggregate metrics as reported by a device. One row per
/// (user, date); re-ingesting the same day overwrites every column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyAggregates {
    pub steps: Option<i64>,
    pub calories: Option<f64>,
    pub distance_m: Option<f64>,
    pub active_minutes: Option<i32>,
    pub sleep_minutes: Option<i32>,
    pub heart_rate_avg: Option<f64>,
    pub heart_rate_min: Option<f64>,
    pub heart_rate_max: Option<f64>,
    pub water_ml: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
}

/// A persisted health_daily row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HealthDaily {
    pub id: i64,
    pub user_id: i64,
    pub device_id: Option<i64>,
    pub source: String,
    pub date: NaiveDate,
    pub timezone: Option<String>,
    pub steps: Option<i64>,
    pub calories: Option<f64>,
    pub distance_m: Option<f64>,
    pub active_minutes: Option<i32>,
    pub sleep_minutes: Option<i32>,
    pub heart_rate_avg: Option<f64>,
    pub heart_rate_min: Option<f64>,
    pub heart_rate_max: Option<f64>,
    pub water_ml: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// One raw time-series sample in an ingest payload. Entries missing a
/// metric, value, or timestamp are filtered out before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingSample {
    pub metric: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// A sample validated for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSample {
    pub metric: String,
    pub value: f64,
    pub unit: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl IncomingSample {
    /// Drops entries missing any required field.
    pub fn into_valid(self) -> Option<NewSample> {
        Some(NewSample {
            metric: self.metric?,
            value: self.value?,
            unit: self.unit,
            recorded_at: self.recorded_at?,
        })
    }
}

/// Single-day totals shown on the dashboard. Every field is nullable:
/// a day with no rows yields all-null totals, never an error.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
pub struct DailyTotals {
    pub steps: Option<i64>,
    pub calories: Option<f64>,
    pub distance_m: Option<f64>,
    pub active_minutes: Option<i64>,
    pub sleep_minutes: Option<i64>,
    pub water_ml: Option<f64>,
    pub heart_rate_avg: Option<f64>,
    pub heart_rate_min: Option<f64>,
    pub heart_rate_max: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
}

/// One point of the recent heart-rate series.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HeartRatePoint {
    pub recorded_at: DateTime<Utc>,
    pub value: f64,
}

/// Per-day step sum in the trailing weekly window.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DailySteps {
    pub date: NaiveDate,
    pub steps: Option<i64>,
}

/// The merged dashboard response.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub totals: DailyTotals,
    pub heart_rate_series: Vec<HeartRatePoint>,
    pub weekly_steps: Vec<DailySteps>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_sample_passes_filter() {
        let sample = IncomingSample {
            metric: Some("heart_rate".into()),
            value: Some(72.0),
            unit: Some("bpm".into()),
            recorded_at: Some(Utc::now()),
        };
        assert!(sample.into_valid().is_some());
    }

    #[test]
    fn sample_missing_metric_is_dropped() {
        let sample = IncomingSample {
            metric: None,
            value: Some(72.0),
            unit: None,
            recorded_at: Some(Utc::now()),
        };
        assert!(sample.into_valid().is_none());
    }

    #[test]
    fn sample_missing_timestamp_is_dropped() {
        let sample = IncomingSample {
            metric: Some("steps".into()),
            value: Some(100.0),
            unit: None,
            recorded_at: None,
        };
        assert!(sample.into_valid().is_none());
    }

    #[test]
    fn unit_is_optional() {
        let sample = IncomingSample {
            metric: Some("steps".into()),
            value: Some(100.0),
            unit: None,
            recorded_at: Some(Utc::now()),
        };
        let valid = sample.into_valid().unwrap();
        assert!(valid.unit.is_none());
    }
}
