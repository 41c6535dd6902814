//! CreateWorkoutHandler - the five-table cascade write.
//!
//! The cover photo is decoded and persisted before any row is inserted,
//! so a bad photo fails the request before it touches the database. The
//! root workout insert is mandatory; child branches are written with a
//! best-effort fan-out, each decoding its own image as it runs. A failed
//! branch is logged and counted, never fatal, and a branch failure skips
//! that branch's descendants.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::domain::workout::{NewExercise, NewMaterial, NewSet, NewWorkout};
use crate::domain::DomainError;
use crate::ports::{ImageStore, WorkoutRepository};

/// Outcome of the cascade: the root id plus how many child branches
/// were dropped on the floor.
#[derive(Debug, Clone, Copy)]
pub struct CreateWorkoutResult {
    pub workout_id: i64,
    pub skipped_branches: u32,
}

pub struct CreateWorkoutHandler {
    workouts: Arc<dyn WorkoutRepository>,
    images: Arc<dyn ImageStore>,
}

impl CreateWorkoutHandler {
    pub fn new(workouts: Arc<dyn WorkoutRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { workouts, images }
    }

    pub async fn handle(&self, cmd: NewWorkout) -> Result<CreateWorkoutResult, DomainError> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Workout name is required"));
        }

        let photo = match &cmd.photo_base64 {
            Some(uri) => Some(self.images.save_data_uri(uri).await?),
            None => None,
        };

        let workout_id = self
            .workouts
            .insert_workout(
                &cmd.name,
                cmd.description.as_deref(),
                photo.as_deref(),
                cmd.duration.as_deref(),
                cmd.difficulty.as_deref(),
                cmd.muscle_groups.as_deref(),
            )
            .await?;

        let materials = join_all(
            cmd.materials
                .iter()
                .map(|m| self.material_branch(workout_id, m)),
        );
        let sets = join_all(cmd.sets.iter().map(|s| self.set_branch(workout_id, s)));
        let (material_skips, set_skips) = futures::join!(materials, sets);

        let skipped_branches =
            material_skips.into_iter().sum::<u32>() + set_skips.into_iter().sum::<u32>();
        if skipped_branches > 0 {
            warn!(workout_id, skipped_branches, "workout created with skipped branches");
        }

        Ok(CreateWorkoutResult {
            workout_id,
            skipped_branches,
        })
    }

    async fn material_branch(&self, workout_id: i64, material: &NewMaterial) -> u32 {
        let image = match &material.image_base64 {
            Some(uri) => match self.images.save_data_uri(uri).await {
                Ok(filename) => Some(filename),
                Err(e) => {
                    warn!(workout_id, error = %e, "skipping material: image not stored");
                    return 1;
                }
            },
            None => None,
        };
        match self
            .workouts
            .insert_material(workout_id, material.title.as_deref(), image.as_deref())
            .await
        {
            Ok(_) => 0,
            Err(e) => {
                warn!(workout_id, error = %e, "skipping material");
                1
            }
        }
    }

    async fn set_branch(&self, workout_id: i64, set: &NewSet) -> u32 {
        let set_id = match self
            .workouts
            .insert_set(workout_id, set.name.as_deref())
            .await
        {
            Ok(id) => id,
            Err(e) => {
                warn!(workout_id, error = %e, "skipping set and its exercises");
                return 1;
            }
        };
        join_all(
            set.exercises
                .iter()
                .map(|e| self.exercise_branch(set_id, e)),
        )
        .await
        .into_iter()
        .sum()
    }

    async fn exercise_branch(&self, set_id: i64, exercise: &NewExercise) -> u32 {
        let image = match &exercise.image_base64 {
            Some(uri) => match self.images.save_data_uri(uri).await {
                Ok(filename) => Some(filename),
                Err(e) => {
                    warn!(set_id, error = %e, "skipping exercise: image not stored");
                    return 1;
                }
            },
            None => None,
        };
        let exercise_id = match self
            .workouts
            .insert_exercise(
                set_id,
                exercise.title.as_deref(),
                exercise.value.as_deref(),
                image.as_deref(),
            )
            .await
        {
            Ok(id) => id,
            Err(e) => {
                warn!(set_id, error = %e, "skipping exercise");
                return 1;
            }
        };

        let mut skipped = 0;
        for (index, step) in exercise.steps.iter().enumerate() {
            let result = self
                .workouts
                .insert_step(
                    exercise_id,
                    step.resolved_number(index),
                    step.title.as_deref(),
                    step.description.as_deref(),
                )
                .await;
            if let Err(e) = result {
                warn!(exercise_id, error = %e, "skipping step");
                skipped += 1;
            }
        }
        skipped
    }
}
