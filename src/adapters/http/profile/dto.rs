//! HTTP DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBodyMetricsRequest {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePersonalDataRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePictureRequest {
    /// `data:image/...;base64,...`
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePictureResponse {
    pub profile_picture: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
