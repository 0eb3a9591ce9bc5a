// src/services/catalog.rs
// DOCUMENTATION: Relationship traversal and lifecycle logic over the entities
// PURPOSE: Intermediary between handlers and storage for multi-entity operations

use crate::errors::ApiError;
use crate::models::{Amenity, City, Place, Review, State, User};
use crate::storage::Storage;
use uuid::Uuid;

pub struct CatalogService;

impl CatalogService {
    /// All cities belonging to a state
    pub async fn cities_of_state<S: Storage>(storage: &S, state_id: Uuid) -> Vec<City> {
        storage
            .all::<City>()
            .await
            .into_iter()
            .filter(|city| city.state_id == state_id)
            .collect()
    }

    /// All places belonging to a city
    pub async fn places_of_city<S: Storage>(storage: &S, city_id: Uuid) -> Vec<Place> {
        storage
            .all::<Place>()
            .await
            .into_iter()
            .filter(|place| place.city_id == city_id)
            .collect()
    }

    /// All reviews written about a place
    pub async fn reviews_of_place<S: Storage>(storage: &S, place_id: Uuid) -> Vec<Review> {
        storage
            .all::<Review>()
            .await
            .into_iter()
            .filter(|review| review.place_id == place_id)
            .collect()
    }

    /// Resolve a place's amenity ids to entities, dropping dangling ids
    pub async fn amenities_of_place<S: Storage>(storage: &S, place: &Place) -> Vec<Amenity> {
        let mut amenities = Vec::new();

        for id in &place.amenity_ids {
            if let Some(amenity) = storage.get::<Amenity>(*id).await {
                amenities.push(amenity);
            }
        }

        amenities
    }

    /// Attach an amenity to a place
    /// Returns true when the link is new, false when it already existed
    pub async fn link_amenity<S: Storage>(
        storage: &S,
        mut place: Place,
        amenity_id: Uuid,
    ) -> Result<bool, ApiError> {
        if !place.amenity_ids.insert(amenity_id) {
            return Ok(false);
        }

        place.touch();
        storage.save(place).await?;
        Ok(true)
    }

    /// Detach an amenity from a place; not-found when the link does not exist
    pub async fn unlink_amenity<S: Storage>(
        storage: &S,
        mut place: Place,
        amenity_id: Uuid,
    ) -> Result<(), ApiError> {
        if !place.amenity_ids.remove(&amenity_id) {
            return Err(ApiError::NotFound(format!(
                "Amenity {} is not linked to place {}",
                amenity_id, place.id
            )));
        }

        place.touch();
        storage.save(place).await?;
        Ok(())
    }

    /// Delete a state and everything hanging off it
    pub async fn delete_state<S: Storage>(storage: &S, state: State) -> Result<(), ApiError> {
        for city in Self::cities_of_state(storage, state.id).await {
            Self::delete_city(storage, city).await?;
        }

        storage.delete::<State>(state.id).await?;
        log::info!("Deleted state {}", state.id);
        Ok(())
    }

    /// Delete a city and its places
    pub async fn delete_city<S: Storage>(storage: &S, city: City) -> Result<(), ApiError> {
        for place in Self::places_of_city(storage, city.id).await {
            Self::delete_place(storage, place).await?;
        }

        storage.delete::<City>(city.id).await?;
        log::info!("Deleted city {}", city.id);
        Ok(())
    }

    /// Delete a place and its reviews
    pub async fn delete_place<S: Storage>(storage: &S, place: Place) -> Result<(), ApiError> {
        for review in Self::reviews_of_place(storage, place.id).await {
            storage.delete::<Review>(review.id).await?;
        }

        storage.delete::<Place>(place.id).await?;
        log::info!("Deleted place {}", place.id);
        Ok(())
    }

    /// Delete a user together with the places they own and the reviews they wrote
    pub async fn delete_user<S: Storage>(storage: &S, user: User) -> Result<(), ApiError> {
        let owned: Vec<Place> = storage
            .all::<Place>()
            .await
            .into_iter()
            .filter(|place| place.user_id == user.id)
            .collect();

        for place in owned {
            Self::delete_place(storage, place).await?;
        }

        let written: Vec<Review> = storage
            .all::<Review>()
            .await
            .into_iter()
            .filter(|review| review.user_id == user.id)
            .collect();

        for review in written {
            storage.delete::<Review>(review.id).await?;
        }

        storage.delete::<User>(user.id).await?;
        log::info!("Deleted user {}", user.id);
        Ok(())
    }

    /// Delete an amenity and detach it from every place referencing it
    pub async fn delete_amenity<S: Storage>(storage: &S, amenity: Amenity) -> Result<(), ApiError> {
        for mut place in storage.all::<Place>().await {
            if place.amenity_ids.remove(&amenity.id) {
                place.touch();
                storage.save(place).await?;
            }
        }

        storage.delete::<Amenity>(amenity.id).await?;
        log::info!("Deleted amenity {}", amenity.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;

    async fn seed_city_with_place(store: &FileStore) -> (State, City, Place, User) {
        let state = State::new("California".to_string());
        let city = City::new("San Francisco".to_string(), state.id);
        let user = User::new("host@example.com".to_string(), "pw".to_string());
        let place = Place::new("Painted Lady".to_string(), city.id, user.id);

        store.save(state.clone()).await.unwrap();
        store.save(city.clone()).await.unwrap();
        store.save(user.clone()).await.unwrap();
        store.save(place.clone()).await.unwrap();

        (state, city, place, user)
    }

    #[tokio::test]
    async fn test_cities_of_state_filters_by_parent() {
        let store = FileStore::ephemeral();
        let (state, city, _, _) = seed_city_with_place(&store).await;

        let other = State::new("Nevada".to_string());
        store.save(other.clone()).await.unwrap();
        store
            .save(City::new("Reno".to_string(), other.id))
            .await
            .unwrap();

        let cities = CatalogService::cities_of_state(&store, state.id).await;
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].id, city.id);
    }

    #[tokio::test]
    async fn test_delete_state_cascades_to_cities_places_reviews() {
        let store = FileStore::ephemeral();
        let (state, _, place, user) = seed_city_with_place(&store).await;
        store
            .save(Review::new("great stay".to_string(), place.id, user.id))
            .await
            .unwrap();

        CatalogService::delete_state(&store, state).await.unwrap();

        assert_eq!(store.count::<State>().await, 0);
        assert_eq!(store.count::<City>().await, 0);
        assert_eq!(store.count::<Place>().await, 0);
        assert_eq!(store.count::<Review>().await, 0);
        // unrelated entities survive
        assert_eq!(store.count::<User>().await, 1);
    }

    #[tokio::test]
    async fn test_delete_user_removes_owned_places_and_reviews() {
        let store = FileStore::ephemeral();
        let (_, _, place, user) = seed_city_with_place(&store).await;

        let reviewer = User::new("guest@example.com".to_string(), "pw".to_string());
        store.save(reviewer.clone()).await.unwrap();
        store
            .save(Review::new("nice".to_string(), place.id, reviewer.id))
            .await
            .unwrap();

        CatalogService::delete_user(&store, user).await.unwrap();

        assert_eq!(store.count::<Place>().await, 0);
        // the reviewer's review died with the place
        assert_eq!(store.count::<Review>().await, 0);
        assert_eq!(store.count::<User>().await, 1);
    }

    #[tokio::test]
    async fn test_link_amenity_is_idempotent() {
        let store = FileStore::ephemeral();
        let (_, _, place, _) = seed_city_with_place(&store).await;
        let wifi = Amenity::new("wifi".to_string());
        store.save(wifi.clone()).await.unwrap();

        let created = CatalogService::link_amenity(&store, place.clone(), wifi.id)
            .await
            .unwrap();
        assert!(created);

        let place: Place = store.get(place.id).await.unwrap();
        let again = CatalogService::link_amenity(&store, place.clone(), wifi.id)
            .await
            .unwrap();
        assert!(!again);

        let place: Place = store.get(place.id).await.unwrap();
        assert_eq!(place.amenity_ids.len(), 1);
    }

    #[tokio::test]
    async fn test_unlink_missing_amenity_is_not_found() {
        let store = FileStore::ephemeral();
        let (_, _, place, _) = seed_city_with_place(&store).await;

        let err = CatalogService::unlink_amenity(&store, place, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_amenity_detaches_from_places() {
        let store = FileStore::ephemeral();
        let (_, _, place, _) = seed_city_with_place(&store).await;
        let wifi = Amenity::new("wifi".to_string());
        store.save(wifi.clone()).await.unwrap();
        CatalogService::link_amenity(&store, place.clone(), wifi.id)
            .await
            .unwrap();

        CatalogService::delete_amenity(&store, wifi).await.unwrap();

        let place: Place = store.get(place.id).await.unwrap();
        assert!(place.amenity_ids.is_empty());
        assert_eq!(store.count::<Amenity>().await, 0);
    }

    #[tokio::test]
    async fn test_amenities_of_place_drops_dangling_ids() {
        let store = FileStore::ephemeral();
        let (_, _, mut place, _) = seed_city_with_place(&store).await;
        let wifi = Amenity::new("wifi".to_string());
        store.save(wifi.clone()).await.unwrap();

        place.amenity_ids.insert(wifi.id);
        place.amenity_ids.insert(Uuid::new_v4()); // dangling
        store.save(place.clone()).await.unwrap();

        let amenities = CatalogService::amenities_of_place(&store, &place).await;
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0].id, wifi.id);
    }
}
