//! Upload storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where decoded images are written
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Public path prefix images are served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl StorageConfig {
    /// Get the upload directory as a path
    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    /// Public URL for a stored filename
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), filename)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.is_empty() {
            return Err(ValidationError::EmptyUploadDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.upload_dir, "./uploads");
        assert_eq!(config.public_prefix, "/uploads");
    }

    #[test]
    fn test_public_url() {
        let config = StorageConfig::default();
        assert_eq!(config.public_url("a.png"), "/uploads/a.png");

        let config = StorageConfig {
            public_prefix: "/uploads/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.public_url("a.png"), "/uploads/a.png");
    }

    #[test]
    fn test_validation_empty_dir_rejected() {
        let config = StorageConfig {
            upload_dir: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
