//! MySQL implementation of the AmenityRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::amenity::Amenity;
use hs_core::errors::DomainError;
use hs_core::repositories::AmenityRepository;

/// MySQL implementation of AmenityRepository
pub struct MySqlAmenityRepository {
    pool: MySqlPool,
}

impl MySqlAmenityRepository {
    /// Create a new MySQL amenity repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_amenity(row: &sqlx::mysql::MySqlRow) -> Result<Amenity, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Amenity {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
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
impl AmenityRepository for MySqlAmenityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError> {
        let query = r#"
            SELECT id, name, created_at, updated_at
            FROM amenities
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_amenity(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Amenity>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at, updated_at FROM amenities")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_amenity).collect()
    }

    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let query = r#"
            INSERT INTO amenities (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(amenity.id.to_string())
            .bind(&amenity.name)
            .bind(amenity.created_at)
            .bind(amenity.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create amenity: {}", e)))?;

        Ok(amenity)
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let query = r#"
            UPDATE amenities
            SET name = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&amenity.name)
            .bind(amenity.updated_at)
            .bind(amenity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update amenity: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Amenity"));
        }

        Ok(amenity)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete amenity: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
