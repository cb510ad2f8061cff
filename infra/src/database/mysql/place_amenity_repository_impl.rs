//! MySQL implementation of the PlaceAmenityRepository trait.
//!
//! The association lives in its own `place_amenities` table with a composite
//! primary key; nothing is loaded implicitly from either side.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hs_core::errors::DomainError;
use hs_core::repositories::PlaceAmenityRepository;

/// MySQL implementation of PlaceAmenityRepository
pub struct MySqlPlaceAmenityRepository {
    pool: MySqlPool,
}

impl MySqlPlaceAmenityRepository {
    /// Create a new MySQL place-amenity repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceAmenityRepository for MySqlPlaceAmenityRepository {
    async fn link(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO place_amenities (place_id, amenity_id)
            VALUES (?, ?)
        "#;

        sqlx::query(query)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::validation("Amenity is already linked to this place")
                }
                _ => DomainError::database(format!("Failed to link amenity: {}", e)),
            })?;

        Ok(())
    }

    async fn unlink(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM place_amenities WHERE place_id = ? AND amenity_id = ?";

        let result = sqlx::query(query)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to unlink amenity: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn contains(&self, place_id: Uuid, amenity_id: Uuid) -> Result<bool, DomainError> {
        let query = "SELECT 1 FROM place_amenities WHERE place_id = ? AND amenity_id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        Ok(result.is_some())
    }

    async fn amenities_for_place(&self, place_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let query = "SELECT amenity_id FROM place_amenities WHERE place_id = ?";

        let rows = sqlx::query(query)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter()
            .map(|row| {
                let id: String = row
                    .try_get("amenity_id")
                    .map_err(|e| DomainError::database(format!("Failed to get amenity_id: {}", e)))?;
                Uuid::parse_str(&id)
                    .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))
            })
            .collect()
    }

    async fn unlink_all_for_place(&self, place_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM place_amenities WHERE place_id = ?")
            .bind(place_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to unlink amenities: {}", e)))?;

        Ok(())
    }
}
