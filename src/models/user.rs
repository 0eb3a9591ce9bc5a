// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account owning places and reviews
/// The password is stored as-is in the storage document but is never exposed
/// through the API: handlers always go through to_response()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response DTO exposed via API (password omitted)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password: String) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email,
            password,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Convert stored User into API response
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request DTO for POST /users
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1))]
    pub password: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request DTO for PUT /users/{id}
/// email is immutable, so it is deliberately absent from the allow-list
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub password: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
