//! PostgreSQL implementation of WorkoutRepository.
//!
//! Thin table mappings; every insert returns the generated id via
//! RETURNING so the cascade orchestrator can chain parent→child writes.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::workout::{Exercise, ExerciseStep, Material, Workout, WorkoutSet};
use crate::domain::DomainError;
use crate::ports::WorkoutRepository;

#[derive(Clone)]
pub struct PostgresWorkoutRepository {
    pool: PgPool,
}

impl PostgresWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn insert_workout(
        &self,
        name: &str,
        description: Option<&str>,
        photo: Option<&str>,
        duration: Option<&str>,
        difficulty: Option<&str>,
        muscle_groups: Option<&str>,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workouts (name, description, photo, duration, difficulty, muscle_groups)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(photo)
        .bind(duration)
        .bind(difficulty)
        .bind(muscle_groups)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to insert workout"))
    }

    async fn insert_material(
        &self,
        workout_id: i64,
        title: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO materials (workout_id, title, image) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(workout_id)
        .bind(title)
        .bind(image)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to insert material"))
    }

    async fn insert_set(&self, workout_id: i64, name: Option<&str>) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO workout_sets (workout_id, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(workout_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to insert set"))
    }

    async fn insert_exercise(
        &self,
        set_id: i64,
        title: Option<&str>,
        value: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO exercises (set_id, title, value, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(set_id)
        .bind(title)
        .bind(value)
        .bind(image)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to insert exercise"))
    }

    async fn insert_step(
        &self,
        exercise_id: i64,
        step_number: i32,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO exercise_steps (exercise_id, step_number, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(exercise_id)
        .bind(step_number)
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to insert step"))
    }

    async fn find_workout(&self, id: i64) -> Result<Option<Workout>, DomainError> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to fetch workout"))
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, DomainError> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list workouts"))
    }

    async fn materials_for(&self, workout_id: i64) -> Result<Vec<Material>, DomainError> {
        sqlx::query_as::<_, Material>("SELECT * FROM materials WHERE workout_id = $1")
            .bind(workout_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to fetch materials"))
    }

    async fn sets_for(&self, workout_id: i64) -> Result<Vec<WorkoutSet>, DomainError> {
        sqlx::query_as::<_, WorkoutSet>(
            "SELECT * FROM workout_sets WHERE workout_id = $1 ORDER BY id",
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to fetch sets"))
    }

    async fn exercises_for(&self, set_id: i64) -> Result<Vec<Exercise>, DomainError> {
        sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE set_id = $1 ORDER BY id")
            .bind(set_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to fetch exercises"))
    }

    async fn steps_for(&self, exercise_id: i64) -> Result<Vec<ExerciseStep>, DomainError> {
        sqlx::query_as::<_, ExerciseStep>(
            "SELECT * FROM exercise_steps WHERE exercise_id = $1 ORDER BY step_number",
        )
        .bind(exercise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to fetch steps"))
    }

    async fn find_exercise(&self, id: i64) -> Result<Option<Exercise>, DomainError> {
        sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to fetch exercise"))
    }

    async fn delete_workout(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete workout"))?;

        Ok(result.rows_affected() > 0)
    }
}
