// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user operations
// PURPOSE: Parse requests, call services, return responses
// User responses always go through to_response() so the password never leaks

use crate::errors::ApiError;
use crate::handlers::{fetch, parse_object};
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use validator::Validate;

/// GET /users
pub async fn list_users<S: Storage>(storage: web::Data<S>) -> Result<impl Responder, ApiError> {
    let users: Vec<UserResponse> = storage
        .all::<User>()
        .await
        .iter()
        .map(User::to_response)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn get_user<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let user = fetch::<User, S>(storage.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(user.to_response()))
}

/// POST /users
pub async fn create_user<S: Storage>(
    storage: web::Data<S>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let req: CreateUserRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let email = req.email.ok_or(ApiError::MissingField("email"))?;
    let password = req.password.ok_or(ApiError::MissingField("password"))?;

    let mut user = User::new(email, password);
    user.first_name = req.first_name;
    user.last_name = req.last_name;
    storage.save(user.clone()).await?;

    log::info!("Created user {}", user.id);
    Ok(HttpResponse::Created().json(user.to_response()))
}

/// PUT /users/{id}
/// email is immutable; a body naming it is rejected by the allow-list
pub async fn update_user<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let mut user = fetch::<User, S>(storage.get_ref(), &path).await?;
    let req: UpdateUserRequest = parse_object(&body)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    if let Some(password) = req.password {
        user.password = password;
    }
    if req.first_name.is_some() {
        user.first_name = req.first_name;
    }
    if req.last_name.is_some() {
        user.last_name = req.last_name;
    }
    user.touch();
    storage.save(user.clone()).await?;

    Ok(HttpResponse::Ok().json(user.to_response()))
}

/// DELETE /users/{id}
/// Removes the user, the places they own and the reviews they wrote
pub async fn delete_user<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let user = fetch::<User, S>(storage.get_ref(), &path).await?;
    CatalogService::delete_user(storage.get_ref(), user).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for user routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users::<S>))
            .route(web::post().to(create_user::<S>)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::get().to(get_user::<S>))
            .route(web::put().to(update_user::<S>))
            .route(web::delete().to(delete_user::<S>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_user_requires_email_and_password() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FileStore::ephemeral()))
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"password": "secret"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"email": "a@b.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_password_never_appears_in_responses() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FileStore::ephemeral()))
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"email": "a@b.com", "password": "secret"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("password").is_none());
        assert_eq!(body["email"], "a@b.com");
    }

    #[actix_web::test]
    async fn test_invalid_email_is_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FileStore::ephemeral()))
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"email": "nope", "password": "secret"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
