//! MySQL implementation of the ReviewRepository trait.
//!
//! The UNIQUE (user_id, place_id) index makes the one-review-per-place rule
//! hold even when two requests race past the service-level check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::review::Review;
use hs_core::errors::DomainError;
use hs_core::repositories::ReviewRepository;

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    /// Create a new MySQL review repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Review entity
    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> Result<Review, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;
        let place_id: String = row
            .try_get("place_id")
            .map_err(|e| DomainError::database(format!("Failed to get place_id: {}", e)))?;

        Ok(Review {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            text: row
                .try_get("text")
                .map_err(|e| DomainError::database(format!("Failed to get text: {}", e)))?,
            rating: row
                .try_get("rating")
                .map_err(|e| DomainError::database(format!("Failed to get rating: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            place_id: Uuid::parse_str(&place_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let query = r#"
            SELECT id, text, rating, user_id, place_id, created_at, updated_at
            FROM reviews
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let query = r#"
            SELECT id, text, rating, user_id, place_id, created_at, updated_at
            FROM reviews
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let query = r#"
            SELECT id, text, rating, user_id, place_id, created_at, updated_at
            FROM reviews
            WHERE place_id = ?
        "#;

        let rows = sqlx::query(query)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn find_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, DomainError> {
        let query = r#"
            SELECT id, text, rating, user_id, place_id, created_at, updated_at
            FROM reviews
            WHERE user_id = ? AND place_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(place_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (id, text, rating, user_id, place_id,
                                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.user_id.to_string())
            .bind(review.place_id.to_string())
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::validation("You have already reviewed this place.")
                }
                _ => DomainError::database(format!("Failed to create review: {}", e)),
            })?;

        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            UPDATE reviews
            SET text = ?, rating = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.updated_at)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update review: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Review"));
        }

        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete review: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
