// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and shared request helpers

pub mod amenities;
pub mod cities;
pub mod index;
pub mod place_amenities;
pub mod places;
pub mod reviews;
pub mod states;
pub mod users;

pub use amenities::config as amenities_config;
pub use cities::config as cities_config;
pub use index::config as index_config;
pub use place_amenities::config as place_amenities_config;
pub use places::config as places_config;
pub use reviews::config as reviews_config;
pub use states::config as states_config;
pub use users::config as users_config;

use crate::errors::ApiError;
use crate::storage::{Entity, Storage};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// Deserialize a request DTO from a JSON body that must be an object
/// A non-object body is the "Not a JSON" client error; a body with rejected
/// or malformed fields reports the serde error verbatim
pub(crate) fn parse_object<T: DeserializeOwned>(body: &Value) -> Result<T, ApiError> {
    if !body.is_object() {
        return Err(ApiError::NotAJson);
    }

    serde_json::from_value(body.clone()).map_err(|e| ApiError::InvalidInput(e.to_string()))
}

/// Fetch a path-referenced entity or answer 404
/// A non-UUID path id gets the same not-found answer as an unknown one
pub(crate) async fn fetch<E: Entity, S: Storage>(storage: &S, raw_id: &str) -> Result<E, ApiError> {
    if let Ok(id) = Uuid::parse_str(raw_id) {
        if let Some(entity) = storage.get::<E>(id).await {
            return Ok(entity);
        }
    }

    Err(ApiError::NotFound(format!("{} {} not found", E::KIND, raw_id)))
}
