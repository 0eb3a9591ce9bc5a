// src/handlers/states.rs
// DOCUMENTATION: HTTP handlers for state operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{CreateStateRequest, State, UpdateStateRequest};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /states
pub async fn list_states<S: Storage>(storage: web::Data<S>) -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(storage.all::<State>().await))
}

/// GET /states/{id}
pub async fn get_state<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = fetch::<State, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(state))
}

/// POST /states
pub async fn create_state<S: Storage>(
    storage: web::Data<S>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let req: CreateStateRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let name = req.name.ok_or(ApiError::MissingField("name"))?;
    let state = State::new(name);
    storage.save(state.clone()).await?;

    log::info!("Created state {}", state.id);
    Ok(HttpResponse::Created().json(state))
}

/// PUT /states/{id}
pub async fn update_state<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut state = fetch::<State, S>(storage.get_ref(), &path).await?;
    let req: UpdateStateRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    if let Some(name) = req.name {
        state.name = name;
    }
    state.touch();
    storage.save(state.clone()).await?;

    Ok(HttpResponse::Ok().json(state))
}

/// DELETE /states/{id}
/// Removes the state and everything hanging off it (cities, places, reviews)
pub async fn delete_state<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = fetch::<State, S>(storage.get_ref(), &path).await?;
    CatalogService::delete_state(storage.get_ref(), state).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for state routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/states")
            .route(web::get().to(list_states::<S>))
            .route(web::post().to(create_state::<S>)),
    )
    .service(
        web::resource("/states/{id}")
            .route(web::get().to(get_state::<S>))
            .route(web::put().to(update_state::<S>))
            .route(web::delete().to(delete_state::<S>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use actix_web::{http::StatusCode, test, App};

    fn app_store() -> web::Data<FileStore> {
        web::Data::new(FileStore::ephemeral())
    }

    #[actix_web::test]
    async fn test_state_crud_roundtrip() {
        let store = app_store();
        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .configure(config::<FileStore>),
        )
        .await;

        // create
        let req = test::TestRequest::post()
            .uri("/states")
            .set_json(json!({"name": "California"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: State = test::read_body_json(resp).await;
        assert_eq!(created.name, "California");

        // read back
        let req = test::TestRequest::get()
            .uri(&format!("/states/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // rename
        let req = test::TestRequest::put()
            .uri(&format!("/states/{}", created.id))
            .set_json(json!({"name": "Cali"}))
            .to_request();
        let updated: State = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.name, "Cali");

        // delete
        let req = test::TestRequest::delete()
            .uri(&format!("/states/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.count::<State>().await, 0);
    }

    #[actix_web::test]
    async fn test_create_state_without_name_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_store())
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/states")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_with_protected_field_is_rejected() {
        let store = app_store();
        let state = State::new("Nevada".to_string());
        store.save(state.clone()).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/states/{}", state.id))
            .set_json(json!({"id": "overwritten"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_unknown_or_malformed_id_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(app_store())
                .configure(config::<FileStore>),
        )
        .await;

        for uri in ["/states/not-a-uuid", &format!("/states/{}", uuid::Uuid::new_v4())] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }
}
