//! PostgreSQL implementation of ScheduleRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::schedule::{NewSchedule, Schedule, ScheduleChanges, ScheduleFilter};
use crate::domain::DomainError;
use crate::ports::ScheduleRepository;

/// Schedule columns joined to workout display fields; the LEFT JOIN keeps
/// schedules whose workout disappeared.
const SELECT_WITH_WORKOUT: &str = r#"
    SELECT ws.id, ws.user_id, ws.workout_id, ws.scheduled_date, ws.scheduled_time,
           ws.duration, ws.difficulty, ws.repetitions, ws.weights, ws.status, ws.completed_at,
           w.name AS workout_name,
           w.photo AS workout_photo,
           w.description AS workout_description
    FROM workout_schedules ws
    LEFT JOIN workouts w ON ws.workout_id = w.id
"#;

#[derive(Clone)]
pub struct PostgresScheduleRepository {
    pool: PgPool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn create(&self, schedule: &NewSchedule) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workout_schedules
                (user_id, workout_id, scheduled_date, scheduled_time,
                 duration, difficulty, repetitions, weights)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(schedule.user_id)
        .bind(schedule.workout_id)
        .bind(schedule.scheduled_date)
        .bind(schedule.scheduled_time)
        .bind(&schedule.duration)
        .bind(&schedule.difficulty)
        .bind(&schedule.repetitions)
        .bind(&schedule.weights)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert schedule: {}", e)))
    }

    async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>, DomainError> {
        let sql = format!(
            r#"
            {SELECT_WITH_WORKOUT}
            WHERE ($1::bigint IS NULL OR ws.user_id = $1)
              AND ($2::date IS NULL OR ws.scheduled_date >= $2)
              AND ($3::date IS NULL OR ws.scheduled_date <= $3)
            ORDER BY ws.scheduled_date ASC, ws.scheduled_time ASC
            "#
        );

        sqlx::query_as::<_, Schedule>(&sql)
            .bind(filter.user_id)
            .bind(filter.start_date)
            .bind(filter.end_date)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list schedules: {}", e)))
    }

    async fn for_date(
        &self,
        date: NaiveDate,
        user_id: Option<i64>,
    ) -> Result<Vec<Schedule>, DomainError> {
        let sql = format!(
            r#"
            {SELECT_WITH_WORKOUT}
            WHERE ws.scheduled_date = $1
              AND ($2::bigint IS NULL OR ws.user_id = $2)
            ORDER BY ws.scheduled_time ASC
            "#
        );

        sqlx::query_as::<_, Schedule>(&sql)
            .bind(date)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch schedules: {}", e)))
    }

    async fn find(&self, id: i64) -> Result<Option<Schedule>, DomainError> {
        let sql = format!("{SELECT_WITH_WORKOUT} WHERE ws.id = $1");

        sqlx::query_as::<_, Schedule>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch schedule: {}", e)))
    }

    async fn update(&self, id: i64, changes: &ScheduleChanges) -> Result<bool, DomainError> {
        // COALESCE keeps untouched columns; completed_at is set only on
        // the pending→completed transition.
        let result = sqlx::query(
            r#"
            UPDATE workout_schedules SET
                scheduled_date = COALESCE($2, scheduled_date),
                scheduled_time = COALESCE($3, scheduled_time),
                duration       = COALESCE($4, duration),
                difficulty     = COALESCE($5, difficulty),
                repetitions    = COALESCE($6, repetitions),
                weights        = COALESCE($7, weights),
                status         = COALESCE($8, status),
                completed_at   = CASE WHEN $9 THEN now() ELSE completed_at END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.scheduled_date)
        .bind(changes.scheduled_time)
        .bind(&changes.duration)
        .bind(&changes.difficulty)
        .bind(&changes.repetitions)
        .bind(&changes.weights)
        .bind(&changes.status)
        .bind(changes.marks_completed())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update schedule: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn complete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE workout_schedules SET status = 'completed', completed_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to complete schedule: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM workout_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete schedule: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
