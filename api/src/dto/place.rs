use serde::Deserialize;
use uuid::Uuid;

use hs_core::services::places::{NewPlace, UpdatePlace};

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
}

impl From<CreatePlaceRequest> for NewPlace {
    fn from(request: CreatePlaceRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            latitude: request.latitude,
            longitude: request.longitude,
            owner_id: request.owner_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdatePlaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdatePlaceRequest> for UpdatePlace {
    fn from(request: UpdatePlaceRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddAmenityRequest {
    pub amenity_id: Uuid,
}
