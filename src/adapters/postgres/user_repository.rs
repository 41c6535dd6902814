//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::user::{BodyMetrics, NewUser, User};
use crate::domain::{DomainError, ErrorCode};
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

fn map_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db) = e {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::conflict("Email already registered");
        }
    }
    DomainError::database(format!("Failed to insert user: {}", e))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i64, DomainError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, phone_number, gender)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone_number)
        .bind(&user.gender)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))
    }

    async fn update_body_metrics(
        &self,
        id: i64,
        metrics: BodyMetrics,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET height = $2, weight = $3, age = $4 WHERE id = $1")
            .bind(id)
            .bind(metrics.height)
            .bind(metrics.weight)
            .bind(metrics.age)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User", id));
        }
        Ok(())
    }

    async fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1 AND id != $2")
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to check email: {}", e)))?;

        Ok(count > 0)
    }

    async fn update_personal_data(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: Option<&str>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db) = e {
                if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return DomainError::new(
                        ErrorCode::Conflict,
                        "Email already in use by another account",
                    );
                }
            }
            DomainError::database(format!("Failed to update personal data: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User", id));
        }
        Ok(())
    }

    async fn set_profile_picture(
        &self,
        id: i64,
        filename: &str,
    ) -> Result<Option<String>, DomainError> {
        // Single statement so the old filename comes back atomically
        // with the update.
        let previous: Option<Option<String>> = sqlx::query_scalar(
            r#"
            UPDATE users u
            SET profile_picture = $2
            FROM (SELECT id, profile_picture FROM users WHERE id = $1) old
            WHERE u.id = old.id
            RETURNING old.profile_picture
            "#,
        )
        .bind(id)
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update picture: {}", e)))?;

        match previous {
            Some(old) => Ok(old),
            None => Err(DomainError::not_found("User", id)),
        }
    }
}
