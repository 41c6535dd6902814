//! HTTP DTOs for the progress-photo gallery.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct UploadPhotoRequest {
    /// `data:image/...;base64,...`
    pub photo_base64: String,
    /// Defaults to today when absent.
    #[serde(default)]
    pub taken_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadPhotoResponse {
    pub id: i64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryResponse {
    /// Suggested date for the next progress photo, 30 days after the
    /// newest one; absent while the gallery is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_photo_reminder: Option<NaiveDate>,
    pub groups: Vec<crate::domain::gallery::PhotoGroup>,
}
