//! SummaryHandler - merges the three dashboard queries into one response.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::health::DashboardSummary;
use crate::domain::DomainError;
use crate::ports::DashboardReader;

pub struct SummaryHandler {
    reader: Arc<dyn DashboardReader>,
}

impl SummaryHandler {
    pub fn new(reader: Arc<dyn DashboardReader>) -> Self {
        Self { reader }
    }

    /// Totals, heart-rate series, and the weekly step window for one
    /// day. The queries are independent and run concurrently.
    pub async fn handle(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<DashboardSummary, DomainError> {
        let (totals, heart_rate_series, weekly_steps) = tokio::try_join!(
            self.reader.daily_totals(user_id, date),
            self.reader.heart_rate_series(user_id, date),
            self.reader.weekly_steps(user_id, date),
        )?;

        Ok(DashboardSummary {
            date,
            totals,
            heart_rate_series,
            weekly_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{ts, MockDashboardReader};
    use crate::domain::health::{DailySteps, DailyTotals, HeartRatePoint};

    #[tokio::test]
    async fn summary_merges_all_three_queries() {
        let reader = Arc::new(MockDashboardReader::new());
        *reader.totals.lock().unwrap() = DailyTotals {
            steps: Some(8500),
            calories: Some(2100.0),
            ..Default::default()
        };
        *reader.series.lock().unwrap() = vec![HeartRatePoint {
            recorded_at: ts("2024-03-14T08:00:00Z"),
            value: 71.0,
        }];
        *reader.steps.lock().unwrap() = vec![DailySteps {
            date: "2024-03-14".parse().unwrap(),
            steps: Some(8500),
        }];

        let summary = SummaryHandler::new(reader)
            .handle(1, "2024-03-14".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(summary.totals.steps, Some(8500));
        assert_eq!(summary.heart_rate_series.len(), 1);
        assert_eq!(summary.weekly_steps.len(), 1);
    }

    #[tokio::test]
    async fn day_with_no_data_yields_empty_summary_not_an_error() {
        let reader = Arc::new(MockDashboardReader::new());
        let summary = SummaryHandler::new(reader)
            .handle(1, "2024-03-14".parse().unwrap())
            .await
            .unwrap();

        assert!(summary.totals.steps.is_none());
        assert!(summary.heart_rate_series.is_empty());
        assert!(summary.weekly_steps.is_empty());
    }
}
