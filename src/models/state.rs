// src/models/state.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Top-level geographic unit; owns a collection of cities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl State {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        State {
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

/// Request DTO for POST /states
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStateRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}

/// Request DTO for PUT /states/{id}
/// Allow-listed fields only; anything else is rejected with a 400
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateStateRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}
