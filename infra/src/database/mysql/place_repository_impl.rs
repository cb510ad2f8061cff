//! MySQL implementation of the PlaceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::place::Place;
use hs_core::errors::DomainError;
use hs_core::repositories::PlaceRepository;

/// MySQL implementation of PlaceRepository
pub struct MySqlPlaceRepository {
    pool: MySqlPool,
}

impl MySqlPlaceRepository {
    /// Create a new MySQL place repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Place entity
    ///
    /// Goes through `Place::from_stored`, so a row that somehow carries an
    /// out-of-range value is rejected instead of resurfacing unchecked.
    fn row_to_place(row: &sqlx::mysql::MySqlRow) -> Result<Place, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::database(format!("Failed to get owner_id: {}", e)))?;

        Place::from_stored(
            Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            row.try_get("title")
                .map_err(|e| DomainError::database(format!("Failed to get title: {}", e)))?,
            row.try_get("description")
                .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?,
            row.try_get("price")
                .map_err(|e| DomainError::database(format!("Failed to get price: {}", e)))?,
            row.try_get("latitude")
                .map_err(|e| DomainError::database(format!("Failed to get latitude: {}", e)))?,
            row.try_get("longitude")
                .map_err(|e| DomainError::database(format!("Failed to get longitude: {}", e)))?,
            Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        )
    }
}

#[async_trait]
impl PlaceRepository for MySqlPlaceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let query = r#"
            SELECT id, title, description, price, latitude, longitude,
                   owner_id, created_at, updated_at
            FROM places
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_place(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Place>, DomainError> {
        let query = r#"
            SELECT id, title, description, price, latitude, longitude,
                   owner_id, created_at, updated_at
            FROM places
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_place).collect()
    }

    async fn create(&self, place: Place) -> Result<Place, DomainError> {
        let query = r#"
            INSERT INTO places (id, title, description, price, latitude, longitude,
                                owner_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(place.id.to_string())
            .bind(&place.title)
            .bind(&place.description)
            .bind(place.price())
            .bind(place.latitude())
            .bind(place.longitude())
            .bind(place.owner_id.to_string())
            .bind(place.created_at)
            .bind(place.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create place: {}", e)))?;

        Ok(place)
    }

    async fn update(&self, place: Place) -> Result<Place, DomainError> {
        let query = r#"
            UPDATE places
            SET title = ?, description = ?, price = ?, latitude = ?,
                longitude = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&place.title)
            .bind(&place.description)
            .bind(place.price())
            .bind(place.latitude())
            .bind(place.longitude())
            .bind(place.updated_at)
            .bind(place.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update place: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Place"));
        }

        Ok(place)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM places WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete place: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
