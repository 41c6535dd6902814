//! Read-only port for the dashboard aggregation queries.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::health::{DailySteps, DailyTotals, HeartRatePoint};
use crate::domain::DomainError;

#[async_trait]
pub trait DashboardReader: Send + Sync {
    /// Summed/averaged totals for one day. A day with no rows yields
    /// all-null totals.
    async fn daily_totals(&self, user_id: i64, date: NaiveDate)
        -> Result<DailyTotals, DomainError>;

    /// The most recent up-to-30 heart-rate samples of that calendar day,
    /// returned in chronological order.
    async fn heart_rate_series(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<HeartRatePoint>, DomainError>;

    /// Per-day step sums for the 7-day window ending on `date`
    /// (inclusive), in chronological order.
    async fn weekly_steps(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<DailySteps>, DomainError>;
}
