// src/handlers/amenities.rs
// DOCUMENTATION: HTTP handlers for amenity operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{Amenity, CreateAmenityRequest, UpdateAmenityRequest};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /amenities
pub async fn list_amenities<S: Storage>(storage: web::Data<S>) -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(storage.all::<Amenity>().await))
}

/// GET /amenities/{id}
pub async fn get_amenity<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let amenity = fetch::<Amenity, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(amenity))
}

/// POST /amenities
pub async fn create_amenity<S: Storage>(
    storage: web::Data<S>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let req: CreateAmenityRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let name = req.name.ok_or(ApiError::MissingField("name"))?;
    let amenity = Amenity::new(name);
    storage.save(amenity.clone()).await?;

    log::info!("Created amenity {}", amenity.id);
    Ok(HttpResponse::Created().json(amenity))
}

/// PUT /amenities/{id}
pub async fn update_amenity<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut amenity = fetch::<Amenity, S>(storage.get_ref(), &path).await?;
    let req: UpdateAmenityRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    if let Some(name) = req.name {
        amenity.name = name;
    }
    amenity.touch();
    storage.save(amenity.clone()).await?;

    Ok(HttpResponse::Ok().json(amenity))
}

/// DELETE /amenities/{id}
/// Detaches the amenity from every place before removing it
pub async fn delete_amenity<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let amenity = fetch::<Amenity, S>(storage.get_ref(), &path).await?;
    CatalogService::delete_amenity(storage.get_ref(), amenity).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for amenity routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/amenities")
            .route(web::get().to(list_amenities::<S>))
            .route(web::post().to(create_amenity::<S>)),
    )
    .service(
        web::resource("/amenities/{id}")
            .route(web::get().to(get_amenity::<S>))
            .route(web::put().to(update_amenity::<S>))
            .route(web::delete().to(delete_amenity::<S>)),
    );
}
