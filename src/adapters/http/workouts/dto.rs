//! HTTP DTOs for the workout catalog.

use serde::{Deserialize, Serialize};

use crate::domain::workout::{NewExercise, NewMaterial, NewSet, NewStep, NewWorkout};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub muscle_groups: Option<String>,
    /// `data:image/...;base64,...`
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub materials: Vec<MaterialRequest>,
    #[serde(default)]
    pub sets: Vec<SetRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepRequest {
    #[serde(default)]
    pub step_number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateWorkoutRequest> for NewWorkout {
    fn from(req: CreateWorkoutRequest) -> Self {
        NewWorkout {
            name: req.name,
            description: req.description,
            duration: req.duration,
            difficulty: req.difficulty,
            muscle_groups: req.muscle_groups,
            photo_base64: req.photo,
            materials: req
                .materials
                .into_iter()
                .map(|m| NewMaterial {
                    title: m.title,
                    image_base64: m.image,
                })
                .collect(),
            sets: req
                .sets
                .into_iter()
                .map(|s| NewSet {
                    name: s.name,
                    exercises: s
                        .exercises
                        .into_iter()
                        .map(|e| NewExercise {
                            title: e.title,
                            value: e.value,
                            image_base64: e.image,
                            steps: e
                                .steps
                                .into_iter()
                                .map(|st| NewStep {
                                    step_number: st.step_number,
                                    title: st.title,
                                    description: st.description,
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkoutResponse {
    pub id: i64,
    pub skipped_branches: u32,
}
