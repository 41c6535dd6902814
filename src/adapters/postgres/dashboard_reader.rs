//! PostgreSQL implementation of DashboardReader.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use sqlx::PgPool;

use crate::domain::health::{DailySteps, DailyTotals, HeartRatePoint};
use crate::domain::DomainError;
use crate::ports::DashboardReader;

#[derive(Clone)]
pub struct PostgresDashboardReader {
    pool: PgPool,
}

impl PostgresDashboardReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardReader for PostgresDashboardReader {
    async fn daily_totals(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<DailyTotals, DomainError> {
        // Aggregates over an empty set are NULL, which is exactly the
        // "no data yet" shape the dashboard wants.
        sqlx::query_as::<_, DailyTotals>(
            r#"
            SELECT
                SUM(steps)::bigint       AS steps,
                SUM(calories)            AS calories,
                SUM(distance_m)          AS distance_m,
                SUM(active_minutes)::bigint AS active_minutes,
                SUM(sleep_minutes)::bigint  AS sleep_minutes,
                SUM(water_ml)            AS water_ml,
                AVG(heart_rate_avg)      AS heart_rate_avg,
                MIN(heart_rate_min)      AS heart_rate_min,
                MAX(heart_rate_max)      AS heart_rate_max,
                AVG(weight_kg)           AS weight_kg,
                AVG(bmi)                 AS bmi
            FROM health_daily
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch totals: {}", e)))
    }

    async fn heart_rate_series(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<HeartRatePoint>, DomainError> {
        // Newest 30 of the day, then flipped back to chronological order.
        let mut points = sqlx::query_as::<_, HeartRatePoint>(
            r#"
            SELECT recorded_at, value
            FROM health_samples
            WHERE user_id = $1
              AND metric = 'heart_rate'
              AND recorded_at::date = $2
            ORDER BY recorded_at DESC
            LIMIT 30
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch heart rate: {}", e)))?;

        points.reverse();
        Ok(points)
    }

    async fn weekly_steps(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<DailySteps>, DomainError> {
        let window_start = date - Duration::days(6);

        sqlx::query_as::<_, DailySteps>(
            r#"
            SELECT date, SUM(steps)::bigint AS steps
            FROM health_daily
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(window_start)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch weekly steps: {}", e)))
    }
}
