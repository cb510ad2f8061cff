use serde::Deserialize;

use hs_core::services::amenities::{NewAmenity, UpdateAmenity};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
}

impl From<CreateAmenityRequest> for NewAmenity {
    fn from(request: CreateAmenityRequest) -> Self {
        Self { name: request.name }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
}

impl From<UpdateAmenityRequest> for UpdateAmenity {
    fn from(request: UpdateAmenityRequest) -> Self {
        Self { name: request.name }
    }
}
