//! DeleteWorkoutHandler - removes a workout row and its stored photo.
//!
//! Child rows go with the workout via foreign-key cascade. The file is
//! removed after the row so a storage failure cannot leave a row that
//! points at nothing; a leftover file is only disk waste.

use std::sync::Arc;

use tracing::warn;

use crate::domain::DomainError;
use crate::ports::{ImageStore, WorkoutRepository};

pub struct DeleteWorkoutHandler {
    workouts: Arc<dyn WorkoutRepository>,
    images: Arc<dyn ImageStore>,
}

impl DeleteWorkoutHandler {
    pub fn new(workouts: Arc<dyn WorkoutRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { workouts, images }
    }

    pub async fn handle(&self, id: i64) -> Result<(), DomainError> {
        let workout = self
            .workouts
            .find_workout(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Workout", id))?;

        if !self.workouts.delete_workout(id).await? {
            return Err(DomainError::not_found("Workout", id));
        }

        if let Some(photo) = workout.photo {
            if let Err(e) = self.images.remove(&photo).await {
                warn!(workout_id = id, error = %e, "workout photo not removed");
            }
        }
        Ok(())
    }
}
