//! Workout aggregate: workout → materials / sets → exercises → steps.
//!
//! The aggregate is assembled from five tables. Sets and exercises keep
//! insertion (id) order; steps are ordered by `step_number`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A workout row without children.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub muscle_groups: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Equipment item attached to a workout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Material {
    pub id: i64,
    pub workout_id: i64,
    pub title: Option<String>,
    pub image: Option<String>,
}

/// A named group of exercises inside a workout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_id: i64,
    pub name: Option<String>,
}

/// One exercise inside a set.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: i64,
    pub set_id: i64,
    pub title: Option<String>,
    pub value: Option<String>,
    pub image: Option<String>,
}

/// An ordered instruction step inside an exercise.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ExerciseStep {
    pub id: i64,
    pub exercise_id: i64,
    pub step_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Fully hydrated workout tree.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutAggregate {
    #[serde(flatten)]
    pub workout: Workout,
    pub materials: Vec<Material>,
    pub sets: Vec<SetAggregate>,
}

/// A set with its exercises.
#[derive(Debug, Clone, Serialize)]
pub struct SetAggregate {
    #[serde(flatten)]
    pub set: WorkoutSet,
    pub exercises: Vec<ExerciseAggregate>,
}

/// An exercise with its ordered steps.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseAggregate {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub steps: Vec<ExerciseStep>,
}

/// Input for the cascade write. Images arrive as `data:<mime>;base64,...`
/// strings and are persisted to files before any row is inserted.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub muscle_groups: Option<String>,
    pub photo_base64: Option<String>,
    pub materials: Vec<NewMaterial>,
    pub sets: Vec<NewSet>,
}

#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub title: Option<String>,
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSet {
    pub name: Option<String>,
    pub exercises: Vec<NewExercise>,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub title: Option<String>,
    pub value: Option<String>,
    pub image_base64: Option<String>,
    pub steps: Vec<NewStep>,
}

#[derive(Debug, Clone)]
pub struct NewStep {
    /// Explicit display order; defaults to the 1-based input position.
    pub step_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl NewStep {
    /// Resolves the canonical step number given the step's 0-based index
    /// in the input sequence.
    pub fn resolved_number(&self, index: usize) -> i32 {
        self.step_number.unwrap_or(index as i32 + 1)
    }
}
