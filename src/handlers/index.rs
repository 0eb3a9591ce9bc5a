// src/handlers/index.rs
// DOCUMENTATION: Service status and object count endpoints
// PURPOSE: Liveness signal and per-entity stats for the API root

use crate::models::{Amenity, City, Place, Review, State, User};
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /status
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}

/// GET /stats
/// Object counts per entity type, straight from the storage collaborator
pub async fn stats<S: Storage>(storage: web::Data<S>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "amenities": storage.count::<Amenity>().await,
        "cities": storage.count::<City>().await,
        "places": storage.count::<Place>().await,
        "reviews": storage.count::<Review>().await,
        "states": storage.count::<State>().await,
        "users": storage.count::<User>().await,
    }))
}

pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status))
        .route("/stats", web::get().to(stats::<S>));
}
