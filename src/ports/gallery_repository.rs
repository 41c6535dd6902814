//! Port for progress photos.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::gallery::ProgressPhoto;
use crate::domain::DomainError;

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Photos newest first (taken_at, then id, descending), optionally
    /// restricted to one user.
    async fn list(&self, user_id: Option<i64>) -> Result<Vec<ProgressPhoto>, DomainError>;

    async fn insert(
        &self,
        user_id: Option<i64>,
        photo: &str,
        taken_at: NaiveDate,
    ) -> Result<i64, DomainError>;

    /// Stored filename for a photo row, if the row exists.
    async fn photo_name(&self, id: i64) -> Result<Option<String>, DomainError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
