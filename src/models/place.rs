// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines serialization models for the place entity and its DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;

/// A rentable place inside a city
/// The amenity association is an identifier-keyed set: no ordering, no
/// duplicates, entries are dropped when the amenity itself is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Parent city (must reference an existing City)
    pub city_id: Uuid,

    /// Owner (must reference an existing User)
    pub user_id: Uuid,

    /// Place name - required field for all places
    pub name: String,

    /// Optional detailed description
    pub description: Option<String>,

    /// Number of rooms
    pub number_rooms: i32,

    /// Number of bathrooms
    pub number_bathrooms: i32,

    /// Maximum number of guests
    pub max_guest: i32,

    /// Nightly price
    pub price_by_night: i32,

    /// Geographic coordinates
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Linked amenity ids (M:N association)
    #[serde(default)]
    pub amenity_ids: HashSet<Uuid>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Place {
    pub fn new(name: String, city_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Place {
            id: Uuid::new_v4(),
            city_id,
            user_id,
            name,
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenity_ids: HashSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Superset check used by the search filter: the place qualifies only if
    /// it carries every requested amenity (extra amenities allowed)
    pub fn has_all_amenities(&self, requested: &HashSet<Uuid>) -> bool {
        requested.is_subset(&self.amenity_ids)
    }
}

/// Request DTO for POST /cities/{city_id}/places
/// user_id is a raw string so an unknown or malformed id maps to the same
/// not-found answer as a well-formed id of a missing user
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    pub user_id: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub number_rooms: Option<i32>,

    #[validate(range(min = 0))]
    pub number_bathrooms: Option<i32>,

    #[validate(range(min = 0))]
    pub max_guest: Option<i32>,

    #[validate(range(min = 0))]
    pub price_by_night: Option<i32>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Request DTO for PUT /places/{id}
/// Allow-listed partial update: id, city_id, user_id, the amenity set and the
/// timestamps are protected, so a body naming them is rejected with a 400
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub number_rooms: Option<i32>,

    #[validate(range(min = 0))]
    pub number_bathrooms: Option<i32>,

    #[validate(range(min = 0))]
    pub max_guest: Option<i32>,

    #[validate(range(min = 0))]
    pub price_by_night: Option<i32>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl UpdatePlaceRequest {
    /// Apply provided fields onto an existing place
    pub fn apply(&self, place: &mut Place) {
        if let Some(name) = &self.name {
            place.name = name.clone();
        }
        if self.description.is_some() {
            place.description = self.description.clone();
        }
        if let Some(v) = self.number_rooms {
            place.number_rooms = v;
        }
        if let Some(v) = self.number_bathrooms {
            place.number_bathrooms = v;
        }
        if let Some(v) = self.max_guest {
            place.max_guest = v;
        }
        if let Some(v) = self.price_by_night {
            place.price_by_night = v;
        }
        if self.latitude.is_some() {
            place.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            place.longitude = self.longitude;
        }
        place.touch();
    }
}

/// Request DTO for POST /places_search
/// Ids are raw strings: unresolvable entries (including non-UUID strings) are
/// silently skipped, never an error
#[derive(Debug, Default, Deserialize)]
pub struct SearchPlacesRequest {
    #[serde(default)]
    pub states: Vec<String>,

    #[serde(default)]
    pub cities: Vec<String>,

    #[serde(default)]
    pub amenities: Vec<String>,
}

impl SearchPlacesRequest {
    /// True when no location filter was supplied at all, in which case the
    /// whole place set is the candidate set
    pub fn no_location_filter(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty()
    }
}
