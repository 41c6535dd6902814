//! PostgreSQL implementation of GalleryRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::gallery::ProgressPhoto;
use crate::domain::DomainError;
use crate::ports::GalleryRepository;

#[derive(Clone)]
pub struct PostgresGalleryRepository {
    pool: PgPool,
}

impl PostgresGalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for PostgresGalleryRepository {
    async fn list(&self, user_id: Option<i64>) -> Result<Vec<ProgressPhoto>, DomainError> {
        sqlx::query_as::<_, ProgressPhoto>(
            r#"
            SELECT * FROM progress_photos
            WHERE ($1::bigint IS NULL OR user_id = $1)
            ORDER BY taken_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list photos: {}", e)))
    }

    async fn insert(
        &self,
        user_id: Option<i64>,
        photo: &str,
        taken_at: NaiveDate,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO progress_photos (user_id, photo, taken_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user_id)
        .bind(photo)
        .bind(taken_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert photo: {}", e)))
    }

    async fn photo_name(&self, id: i64) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT photo FROM progress_photos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch photo: {}", e)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM progress_photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete photo: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
