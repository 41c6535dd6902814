//! Workout scheduling types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Lifecycle of a scheduled workout. `pending` until the user marks it
/// done, at which point `completed_at` is set server-side.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// A schedule row joined to a few display fields of its workout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Schedule {
    pub id: i64,
    pub user_id: Option<i64>,
    pub workout_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub repetitions: Option<String>,
    pub weights: Option<String>,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub workout_name: Option<String>,
    pub workout_photo: Option<String>,
    pub workout_description: Option<String>,
}

/// Fields required to create a schedule.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub user_id: Option<i64>,
    pub workout_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub repetitions: Option<String>,
    pub weights: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ScheduleChanges {
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub repetitions: Option<String>,
    pub weights: Option<String>,
    pub status: Option<String>,
}

impl ScheduleChanges {
    pub fn is_empty(&self) -> bool {
        self.scheduled_date.is_none()
            && self.scheduled_time.is_none()
            && self.duration.is_none()
            && self.difficulty.is_none()
            && self.repetitions.is_none()
            && self.weights.is_none()
            && self.status.is_none()
    }

    /// Whether this update transitions the schedule to completed.
    pub fn marks_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }
}

/// Optional filters for the schedule listing.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub user_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
