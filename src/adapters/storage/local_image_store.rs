//! Local filesystem implementation of ImageStore.
//!
//! Decodes `data:<mime>;base64,<payload>` strings into uuid-named files
//! under a flat upload directory. Uuid names avoid the collisions a
//! timestamp-derived name would allow for two uploads in the same
//! millisecond.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use crate::domain::{DomainError, ErrorCode};
use crate::ports::ImageStore;

#[derive(Debug, Clone)]
pub struct LocalImageStore {
    base_path: PathBuf,
}

impl LocalImageStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }
}

/// Splits a data URI into (extension, raw bytes).
fn decode_data_uri(data_uri: &str) -> Result<(String, Vec<u8>), DomainError> {
    let invalid = || {
        DomainError::new(
            ErrorCode::ValidationFailed,
            "Invalid base64 image format, expected data:image/<type>;base64,<payload>",
        )
    };

    let rest = data_uri.strip_prefix("data:image/").ok_or_else(invalid)?;
    let (subtype, payload) = rest.split_once(";base64,").ok_or_else(invalid)?;

    if subtype.is_empty() || !subtype.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    let bytes = BASE64.decode(payload).map_err(|_| invalid())?;
    Ok((subtype.to_string(), bytes))
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save_data_uri(&self, data_uri: &str) -> Result<String, DomainError> {
        let (ext, bytes) = decode_data_uri(data_uri)?;
        let filename = format!("{}.{}", Uuid::new_v4(), ext);

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create upload directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let path = self.file_path(&filename);
        fs::write(&path, &bytes)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(filename)
    }

    async fn remove(&self, filename: &str) -> Result<(), DomainError> {
        let path = self.file_path(filename);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn png_data_uri() -> String {
        // 1x1 transparent PNG
        let bytes: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ];
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }

    #[test]
    fn decode_accepts_well_formed_uri() {
        let (ext, bytes) = decode_data_uri(&png_data_uri()).unwrap();
        assert_eq!(ext, "png");
        assert_eq!(bytes.len(), 12);
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        assert!(decode_data_uri("iVBORw0KGgo=").is_err());
        assert!(decode_data_uri("data:text/plain;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn decode_rejects_bad_payload() {
        assert!(decode_data_uri("data:image/png;base64,!!!not-base64!!!").is_err());
    }

    #[tokio::test]
    async fn save_and_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let filename = store.save_data_uri(&png_data_uri()).await.unwrap();
        assert!(filename.ends_with(".png"));
        assert!(dir.path().join(&filename).exists());

        store.remove(&filename).await.unwrap();
        assert!(!dir.path().join(&filename).exists());
    }

    #[tokio::test]
    async fn removing_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        assert!(store.remove("does-not-exist.png").await.is_ok());
    }

    #[tokio::test]
    async fn two_saves_get_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let a = store.save_data_uri(&png_data_uri()).await.unwrap();
        let b = store.save_data_uri(&png_data_uri()).await.unwrap();
        assert_ne!(a, b);
    }
}
