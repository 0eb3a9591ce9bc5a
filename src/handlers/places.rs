// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{
    City, CreatePlaceRequest, Place, SearchPlacesRequest, UpdatePlaceRequest, User,
};
use crate::services::{CatalogService, PlaceSearch};
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /cities/{city_id}/places
pub async fn list_places_of_city<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = fetch::<City, S>(storage.get_ref(), &path).await?;
    let places = CatalogService::places_of_city(storage.get_ref(), city.id).await;
    Ok(HttpResponse::Ok().json(places))
}

/// POST /cities/{city_id}/places
/// The owning user must exist; an unknown user_id is a 404, not a 400
pub async fn create_place<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let city = fetch::<City, S>(storage.get_ref(), &path).await?;
    let req: CreatePlaceRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let user_raw = req.user_id.as_deref().ok_or(ApiError::MissingField("user_id"))?;
    let user = fetch::<User, S>(storage.get_ref(), user_raw).await?;
    let name = req.name.clone().ok_or(ApiError::MissingField("name"))?;

    let mut place = Place::new(name, city.id, user.id);
    place.description = req.description.clone();
    if let Some(v) = req.number_rooms {
        place.number_rooms = v;
    }
    if let Some(v) = req.number_bathrooms {
        place.number_bathrooms = v;
    }
    if let Some(v) = req.max_guest {
        place.max_guest = v;
    }
    if let Some(v) = req.price_by_night {
        place.price_by_night = v;
    }
    place.latitude = req.latitude;
    place.longitude = req.longitude;

    storage.save(place.clone()).await?;

    log::info!("Created place {} in city {}", place.id, city.id);
    Ok(HttpResponse::Created().json(place))
}

/// GET /places/{id}
pub async fn get_place<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// PUT /places/{id}
pub async fn update_place<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    let req: UpdatePlaceRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    req.apply(&mut place);
    storage.save(place.clone()).await?;

    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /places/{id}
/// Removes the place and its reviews
pub async fn delete_place<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    CatalogService::delete_place(storage.get_ref(), place).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// POST /places_search
/// Body is an object with optional "states", "cities" and "amenities" id
/// lists; anything that is not a JSON object is rejected before any filtering
pub async fn search_places<S: Storage>(
    storage: web::Data<S>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    if !body.is_object() {
        return Err(ApiError::NotAJson);
    }

    let req: SearchPlacesRequest = serde_json::from_value(body.into_inner())
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let places = PlaceSearch::search(storage.get_ref(), &req).await;
    Ok(HttpResponse::Ok().json(places))
}

/// Configuration for place routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cities/{city_id}/places")
            .route(web::get().to(list_places_of_city::<S>))
            .route(web::post().to(create_place::<S>)),
    )
    .service(
        web::resource("/places/{id}")
            .route(web::get().to(get_place::<S>))
            .route(web::put().to(update_place::<S>))
            .route(web::delete().to(delete_place::<S>)),
    )
    .service(web::resource("/places_search").route(web::post().to(search_places::<S>)));
}
