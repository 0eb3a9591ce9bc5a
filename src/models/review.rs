// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Review written by a user about a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub place_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(text: String, place_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Review {
            id: Uuid::new_v4(),
            place_id,
            user_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Request DTO for POST /places/{place_id}/reviews
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub user_id: Option<String>,

    #[validate(length(min = 1))]
    pub text: Option<String>,
}

/// Request DTO for PUT /reviews/{id}
/// user_id and place_id are immutable
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1))]
    pub text: Option<String>,
}
