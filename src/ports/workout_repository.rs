//! Port for the five workout-cascade tables.
//!
//! Each insert returns the generated id because child inserts depend on
//! it. The orchestration (ordering, fan-out, partial-failure policy)
//! lives in `application::workout`, not here.

use async_trait::async_trait;

use crate::domain::workout::{Exercise, ExerciseStep, Material, Workout, WorkoutSet};
use crate::domain::DomainError;

#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn insert_workout(
        &self,
        name: &str,
        description: Option<&str>,
        photo: Option<&str>,
        duration: Option<&str>,
        difficulty: Option<&str>,
        muscle_groups: Option<&str>,
    ) -> Result<i64, DomainError>;

    async fn insert_material(
        &self,
        workout_id: i64,
        title: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError>;

    async fn insert_set(&self, workout_id: i64, name: Option<&str>) -> Result<i64, DomainError>;

    async fn insert_exercise(
        &self,
        set_id: i64,
        title: Option<&str>,
        value: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError>;

    async fn insert_step(
        &self,
        exercise_id: i64,
        step_number: i32,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<i64, DomainError>;

    async fn find_workout(&self, id: i64) -> Result<Option<Workout>, DomainError>;

    /// All workouts, newest first.
    async fn list_workouts(&self) -> Result<Vec<Workout>, DomainError>;

    async fn materials_for(&self, workout_id: i64) -> Result<Vec<Material>, DomainError>;

    /// Sets in insertion order.
    async fn sets_for(&self, workout_id: i64) -> Result<Vec<WorkoutSet>, DomainError>;

    /// Exercises in insertion order.
    async fn exercises_for(&self, set_id: i64) -> Result<Vec<Exercise>, DomainError>;

    /// Steps ordered by step_number.
    async fn steps_for(&self, exercise_id: i64) -> Result<Vec<ExerciseStep>, DomainError>;

    async fn find_exercise(&self, id: i64) -> Result<Option<Exercise>, DomainError>;

    /// Deletes a workout; children go with it via FK cascade. Returns
    /// true when a row was removed.
    async fn delete_workout(&self, id: i64) -> Result<bool, DomainError>;
}
