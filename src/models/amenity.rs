// src/models/amenity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Amenity offered by places (wifi, pool, ...); linked M:N to places
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Amenity {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Request DTO for POST /amenities
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmenityRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}

/// Request DTO for PUT /amenities/{id}
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateAmenityRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}
