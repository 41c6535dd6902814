//! Port for device health-data persistence.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::health::{DailyAggregates, HealthDaily, NewSample};
use crate::domain::DomainError;

#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Upserts a device on (user_id, device_uuid), refreshing source,
    /// platform, model and last_seen_at. The insert path and the
    /// already-exists path both return the same row id.
    async fn upsert_device(
        &self,
        user_id: i64,
        device_uuid: &str,
        source: &str,
        platform: Option<&str>,
        model: Option<&str>,
    ) -> Result<i64, DomainError>;

    /// Upserts one health_daily row per (user_id, date), last-write-wins
    /// on every column.
    #[allow(clippy::too_many_arguments)]
    async fn upsert_daily(
        &self,
        user_id: i64,
        device_id: i64,
        source: &str,
        date: NaiveDate,
        timezone: Option<&str>,
        aggregates: &DailyAggregates,
    ) -> Result<(), DomainError>;

    /// Appends validated samples in bulk; returns the number inserted.
    async fn insert_samples(
        &self,
        user_id: i64,
        device_id: i64,
        source: &str,
        samples: &[NewSample],
    ) -> Result<u64, DomainError>;

    /// Daily rows for one user and date.
    async fn daily_for(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<HealthDaily>, DomainError>;
}
