//! Port for durable image storage.

use async_trait::async_trait;

use crate::domain::DomainError;

/// Stores decoded images and removes them when their rows go away.
///
/// Rows reference images by the filename this port hands back, so a
/// delete here must follow the row delete to avoid rows pointing at
/// missing files.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Decodes a `data:<mime>;base64,<payload>` string and persists it,
    /// returning the stored filename. Fails with `VALIDATION_FAILED` on
    /// a malformed data URI and `STORAGE_ERROR` on I/O failure.
    async fn save_data_uri(&self, data_uri: &str) -> Result<String, DomainError>;

    /// Removes a stored file. Missing files are not an error.
    async fn remove(&self, filename: &str) -> Result<(), DomainError>;
}
