//! Port for workout schedules.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::schedule::{NewSchedule, Schedule, ScheduleChanges, ScheduleFilter};
use crate::domain::DomainError;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: &NewSchedule) -> Result<i64, DomainError>;

    /// Schedules matching the filter, ordered by date then time.
    async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>, DomainError>;

    /// Schedules for one date, ordered by time.
    async fn for_date(
        &self,
        date: NaiveDate,
        user_id: Option<i64>,
    ) -> Result<Vec<Schedule>, DomainError>;

    async fn find(&self, id: i64) -> Result<Option<Schedule>, DomainError>;

    /// Applies a partial update. `completed_at` is set server-side when
    /// the changes mark the schedule completed. Returns false when no
    /// row matched.
    async fn update(&self, id: i64, changes: &ScheduleChanges) -> Result<bool, DomainError>;

    /// Marks a schedule completed with a server timestamp. Returns false
    /// when no row matched.
    async fn complete(&self, id: i64) -> Result<bool, DomainError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
