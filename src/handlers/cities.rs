// src/handlers/cities.rs
// DOCUMENTATION: HTTP handlers for city operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{City, CreateCityRequest, State, UpdateCityRequest};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /states/{state_id}/cities
pub async fn list_cities_of_state<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = fetch::<State, S>(storage.get_ref(), &path).await?;
    let cities = CatalogService::cities_of_state(storage.get_ref(), state.id).await;
    Ok(HttpResponse::Ok().json(cities))
}

/// POST /states/{state_id}/cities
pub async fn create_city<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let state = fetch::<State, S>(storage.get_ref(), &path).await?;
    let req: CreateCityRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let name = req.name.ok_or(ApiError::MissingField("name"))?;
    let city = City::new(name, state.id);
    storage.save(city.clone()).await?;

    log::info!("Created city {} in state {}", city.id, state.id);
    Ok(HttpResponse::Created().json(city))
}

/// GET /cities/{id}
pub async fn get_city<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = fetch::<City, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(city))
}

/// PUT /cities/{id}
pub async fn update_city<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut city = fetch::<City, S>(storage.get_ref(), &path).await?;
    let req: UpdateCityRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    if let Some(name) = req.name {
        city.name = name;
    }
    city.touch();
    storage.save(city.clone()).await?;

    Ok(HttpResponse::Ok().json(city))
}

/// DELETE /cities/{id}
/// Removes the city together with its places and their reviews
pub async fn delete_city<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = fetch::<City, S>(storage.get_ref(), &path).await?;
    CatalogService::delete_city(storage.get_ref(), city).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for city routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/states/{state_id}/cities")
            .route(web::get().to(list_cities_of_state::<S>))
            .route(web::post().to(create_city::<S>)),
    )
    .service(
        web::resource("/cities/{id}")
            .route(web::get().to(get_city::<S>))
            .route(web::put().to(update_city::<S>))
            .route(web::delete().to(delete_city::<S>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_cities_require_existing_state() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FileStore::ephemeral()))
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/states/{}/cities", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_and_list_city_under_state() {
        let store = web::Data::new(FileStore::ephemeral());
        let state = State::new("Oregon".to_string());
        store.save(state.clone()).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/states/{}/cities", state.id))
            .set_json(json!({"name": "Portland"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let city: City = test::read_body_json(resp).await;
        assert_eq!(city.state_id, state.id);

        let req = test::TestRequest::get()
            .uri(&format!("/states/{}/cities", state.id))
            .to_request();
        let listed: Vec<City> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, city.id);
    }
}
