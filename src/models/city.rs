// src/models/city.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// City within a state; owns a collection of places
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    /// Parent state (must reference an existing State)
    pub state_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn new(name: String, state_id: Uuid) -> Self {
        let now = Utc::now();
        City {
            id: Uuid::new_v4(),
            name,
            state_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Request DTO for POST /states/{state_id}/cities
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}

/// Request DTO for PUT /cities/{id}
/// state_id is immutable and therefore not listed here
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCityRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}
