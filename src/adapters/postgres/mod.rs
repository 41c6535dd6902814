//! PostgreSQL adapters - sqlx implementations of the repository ports.

mod dashboard_reader;
mod gallery_repository;
mod health_repository;
mod schedule_repository;
mod user_repository;
mod workout_repository;

pub use dashboard_reader::PostgresDashboardReader;
pub use gallery_repository::PostgresGalleryRepository;
pub use health_repository::PostgresHealthRepository;
pub use schedule_repository::PostgresScheduleRepository;
pub use user_repository::PostgresUserRepository;
pub use workout_repository::PostgresWorkoutRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Builds the process-wide connection pool from configuration.
pub async fn build_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
}
