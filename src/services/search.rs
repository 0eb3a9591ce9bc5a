// src/services/search.rs
// DOCUMENTATION: Place search by state/city/amenity id filters
// PURPOSE: Backs POST /places_search

use crate::models::{Amenity, City, Place, SearchPlacesRequest, State};
use crate::services::CatalogService;
use crate::storage::{Entity, Storage};
use std::collections::HashSet;
use uuid::Uuid;

pub struct PlaceSearch;

impl PlaceSearch {
    /// Run the three-stage filter:
    ///   1. expand the requested states into their cities and union them with
    ///      the directly requested cities, deduplicated by city id
    ///   2. collect the places of those cities - or every place when no
    ///      location filter was supplied at all
    ///   3. keep only places whose amenity set contains every requested
    ///      amenity (superset check)
    ///
    /// Unresolvable ids at any stage are skipped, never an error. Results
    /// follow storage iteration order; callers must not rely on ordering.
    pub async fn search<S: Storage>(storage: &S, req: &SearchPlacesRequest) -> Vec<Place> {
        let mut city_ids: HashSet<Uuid> = HashSet::new();

        for raw in &req.states {
            let Some(state) = Self::resolve::<State, S>(storage, raw).await else {
                continue;
            };

            for city in CatalogService::cities_of_state(storage, state.id).await {
                city_ids.insert(city.id);
            }
        }

        for raw in &req.cities {
            if let Some(city) = Self::resolve::<City, S>(storage, raw).await {
                city_ids.insert(city.id);
            }
        }

        // The no-filter case is decided on the raw input, not the resolved
        // sets: a list of only unknown ids still means "filter", and matches
        // nothing
        let places: Vec<Place> = if req.no_location_filter() {
            storage.all::<Place>().await
        } else {
            storage
                .all::<Place>()
                .await
                .into_iter()
                .filter(|place| city_ids.contains(&place.city_id))
                .collect()
        };

        let mut amenity_ids: HashSet<Uuid> = HashSet::new();
        for raw in &req.amenities {
            if let Some(amenity) = Self::resolve::<Amenity, S>(storage, raw).await {
                amenity_ids.insert(amenity.id);
            }
        }

        if amenity_ids.is_empty() {
            log::debug!("Place search matched {} places (no amenity filter)", places.len());
            return places;
        }

        let matched: Vec<Place> = places
            .into_iter()
            .filter(|place| place.has_all_amenities(&amenity_ids))
            .collect();

        log::debug!(
            "Place search matched {} places ({} amenities required)",
            matched.len(),
            amenity_ids.len()
        );

        matched
    }

    /// Best-effort id resolution: non-UUID strings and unknown ids both
    /// resolve to None
    async fn resolve<E: Entity, S: Storage>(storage: &S, raw: &str) -> Option<E> {
        let id = Uuid::parse_str(raw).ok()?;
        storage.get::<E>(id).await
    }
}
