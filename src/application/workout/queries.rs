//! Read side of the workout catalog: hydrated aggregates.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::workout::{
    Exercise, ExerciseAggregate, SetAggregate, Workout, WorkoutAggregate, WorkoutSet,
};
use crate::domain::DomainError;
use crate::ports::WorkoutRepository;

pub struct WorkoutQueries {
    workouts: Arc<dyn WorkoutRepository>,
}

impl WorkoutQueries {
    pub fn new(workouts: Arc<dyn WorkoutRepository>) -> Self {
        Self { workouts }
    }

    /// One workout with materials, sets, exercises, and steps.
    pub async fn get(&self, id: i64) -> Result<WorkoutAggregate, DomainError> {
        let workout = self
            .workouts
            .find_workout(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Workout", id))?;
        self.hydrate(workout).await
    }

    /// Every workout, newest first, each fully hydrated.
    pub async fn list(&self) -> Result<Vec<WorkoutAggregate>, DomainError> {
        let workouts = self.workouts.list_workouts().await?;
        try_join_all(workouts.into_iter().map(|w| self.hydrate(w))).await
    }

    /// One exercise with its ordered steps.
    pub async fn get_exercise(&self, id: i64) -> Result<ExerciseAggregate, DomainError> {
        let exercise = self
            .workouts
            .find_exercise(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Exercise", id))?;
        self.hydrate_exercise(exercise).await
    }

    async fn hydrate(&self, workout: Workout) -> Result<WorkoutAggregate, DomainError> {
        let (materials, sets) = futures::try_join!(
            self.workouts.materials_for(workout.id),
            self.workouts.sets_for(workout.id),
        )?;
        let sets = try_join_all(sets.into_iter().map(|s| self.hydrate_set(s))).await?;
        Ok(WorkoutAggregate {
            workout,
            materials,
            sets,
        })
    }

    async fn hydrate_set(&self, set: WorkoutSet) -> Result<SetAggregate, DomainError> {
        let exercises = self.workouts.exercises_for(set.id).await?;
        let exercises =
            try_join_all(exercises.into_iter().map(|e| self.hydrate_exercise(e))).await?;
        Ok(SetAggregate { set, exercises })
    }

    async fn hydrate_exercise(
        &self,
        exercise: Exercise,
    ) -> Result<ExerciseAggregate, DomainError> {
        let steps = self.workouts.steps_for(exercise.id).await?;
        Ok(ExerciseAggregate { exercise, steps })
    }
}
