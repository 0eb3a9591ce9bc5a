// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for review operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{CreateReviewRequest, Place, Review, UpdateReviewRequest, User};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /places/{place_id}/reviews
pub async fn list_reviews_of_place<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    let reviews = CatalogService::reviews_of_place(storage.get_ref(), place.id).await;
    Ok(HttpResponse::Ok().json(reviews))
}

/// POST /places/{place_id}/reviews
/// The reviewing user must exist; an unknown user_id is a 404
pub async fn create_review<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    let req: CreateReviewRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let user_raw = req.user_id.as_deref().ok_or(ApiError::MissingField("user_id"))?;
    let user = fetch::<User, S>(storage.get_ref(), user_raw).await?;
    let text = req.text.ok_or(ApiError::MissingField("text"))?;

    let review = Review::new(text, place.id, user.id);
    storage.save(review.clone()).await?;

    log::info!("Created review {} for place {}", review.id, place.id);
    Ok(HttpResponse::Created().json(review))
}

/// GET /reviews/{id}
pub async fn get_review<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let review = fetch::<Review, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(review))
}

/// PUT /reviews/{id}
/// Only the text is mutable
pub async fn update_review<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut review = fetch::<Review, S>(storage.get_ref(), &path).await?;
    let req: UpdateReviewRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    if let Some(text) = req.text {
        review.text = text;
    }
    review.touch();
    storage.save(review.clone()).await?;

    Ok(HttpResponse::Ok().json(review))
}

/// DELETE /reviews/{id}
pub async fn delete_review<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let review = fetch::<Review, S>(storage.get_ref(), &path).await?;
    storage.delete::<Review>(review.id).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for review routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/places/{place_id}/reviews")
            .route(web::get().to(list_reviews_of_place::<S>))
            .route(web::post().to(create_review::<S>)),
    )
    .service(
        web::resource("/reviews/{id}")
            .route(web::get().to(get_review::<S>))
            .route(web::put().to(update_review::<S>))
            .route(web::delete().to(delete_review::<S>)),
    );
}
