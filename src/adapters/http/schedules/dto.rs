//! HTTP DTOs for workout schedules.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::schedule::{NewSchedule, ScheduleChanges};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    pub workout_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub repetitions: Option<String>,
    #[serde(default)]
    pub weights: Option<String>,
}

impl CreateScheduleRequest {
    pub fn into_new_schedule(self, user_id: i64) -> NewSchedule {
        NewSchedule {
            user_id: Some(user_id),
            workout_id: self.workout_id,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            duration: self.duration,
            difficulty: self.difficulty,
            repetitions: self.repetitions,
            weights: self.weights,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduleRequest {
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_time: Option<NaiveTime>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub repetitions: Option<String>,
    #[serde(default)]
    pub weights: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<UpdateScheduleRequest> for ScheduleChanges {
    fn from(req: UpdateScheduleRequest) -> Self {
        ScheduleChanges {
            scheduled_date: req.scheduled_date,
            scheduled_time: req.scheduled_time,
            duration: req.duration,
            difficulty: req.difficulty,
            repetitions: req.repetitions,
            weights: req.weights,
            status: req.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleListQuery {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateScheduleResponse {
    pub id: i64,
}
