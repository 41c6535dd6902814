//! PostgreSQL implementation of HealthRepository.
//!
//! Both upserts use ON CONFLICT so repeated ingests for the same device
//! or day update in place; `RETURNING id` makes the device insert path
//! and the already-exists path converge on the same row id.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::health::{DailyAggregates, HealthDaily, NewSample};
use crate::domain::DomainError;
use crate::ports::HealthRepository;

#[derive(Clone)]
pub struct PostgresHealthRepository {
    pool: PgPool,
}

impl PostgresHealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PostgresHealthRepository {
    async fn upsert_device(
        &self,
        user_id: i64,
        device_uuid: &str,
        source: &str,
        platform: Option<&str>,
        model: Option<&str>,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO devices (user_id, device_uuid, source, platform, model, last_seen_at)
            VALUES ($1, $2, $3, $4, $5, now())
            ON CONFLICT (user_id, device_uuid) DO UPDATE SET
                source = EXCLUDED.source,
                platform = EXCLUDED.platform,
                model = EXCLUDED.model,
                last_seen_at = now()
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(device_uuid)
        .bind(source)
        .bind(platform)
        .bind(model)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert device: {}", e)))
    }

    async fn upsert_daily(
        &self,
        user_id: i64,
        device_id: i64,
        source: &str,
        date: NaiveDate,
        timezone: Option<&str>,
        aggregates: &DailyAggregates,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO health_daily
                (user_id, device_id, source, date, timezone, steps, calories, distance_m,
                 active_minutes, sleep_minutes, heart_rate_avg, heart_rate_min, heart_rate_max,
                 water_ml, weight_kg, bmi)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (user_id, date) DO UPDATE SET
                device_id = EXCLUDED.device_id,
                source = EXCLUDED.source,
                timezone = EXCLUDED.timezone,
                steps = EXCLUDED.steps,
                calories = EXCLUDED.calories,
                distance_m = EXCLUDED.distance_m,
                active_minutes = EXCLUDED.active_minutes,
                sleep_minutes = EXCLUDED.sleep_minutes,
                heart_rate_avg = EXCLUDED.heart_rate_avg,
                heart_rate_min = EXCLUDED.heart_rate_min,
                heart_rate_max = EXCLUDED.heart_rate_max,
                water_ml = EXCLUDED.water_ml,
                weight_kg = EXCLUDED.weight_kg,
                bmi = EXCLUDED.bmi,
                updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(device_id)
        .bind(source)
        .bind(date)
        .bind(timezone)
        .bind(aggregates.steps)
        .bind(aggregates.calories)
        .bind(aggregates.distance_m)
        .bind(aggregates.active_minutes)
        .bind(aggregates.sleep_minutes)
        .bind(aggregates.heart_rate_avg)
        .bind(aggregates.heart_rate_min)
        .bind(aggregates.heart_rate_max)
        .bind(aggregates.water_ml)
        .bind(aggregates.weight_kg)
        .bind(aggregates.bmi)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert daily row: {}", e)))?;

        Ok(())
    }

    async fn insert_samples(
        &self,
        user_id: i64,
        device_id: i64,
        source: &str,
        samples: &[NewSample],
    ) -> Result<u64, DomainError> {
        if samples.is_empty() {
            return Ok(0);
        }

        let metrics: Vec<String> = samples.iter().map(|s| s.metric.clone()).collect();
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        // Absent units travel as '' and become NULL on insert.
        let units: Vec<String> = samples
            .iter()
            .map(|s| s.unit.clone().unwrap_or_default())
            .collect();
        let recorded: Vec<chrono::DateTime<chrono::Utc>> =
            samples.iter().map(|s| s.recorded_at).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO health_samples (user_id, device_id, source, metric, value, unit, recorded_at)
            SELECT $1, $2, $3, m, v, NULLIF(u, ''), r
            FROM UNNEST($4::text[], $5::float8[], $6::text[], $7::timestamptz[]) AS t(m, v, u, r)
            "#,
        )
        .bind(user_id)
        .bind(device_id)
        .bind(source)
        .bind(&metrics)
        .bind(&values)
        .bind(&units)
        .bind(&recorded)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert samples: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn daily_for(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<HealthDaily>, DomainError> {
        sqlx::query_as::<_, HealthDaily>(
            r#"
            SELECT * FROM health_daily
            WHERE user_id = $1 AND date = $2
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch daily rows: {}", e)))
    }
}
