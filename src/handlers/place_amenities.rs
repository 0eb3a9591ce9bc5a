// src/handlers/place_amenities.rs
// DOCUMENTATION: HTTP handlers for the place-amenity association
// PURPOSE: List, attach and detach amenities on a place

use crate::errors::ApiError;
use crate::handlers::fetch;
use crate::models::{Amenity, Place};
use crate::services::CatalogService;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /places/{place_id}/amenities
pub async fn list_place_amenities<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = fetch::<Place, S>(storage.get_ref(), &path).await?;
    let amenities = CatalogService::amenities_of_place(storage.get_ref(), &place).await;
    Ok(HttpResponse::Ok().json(amenities))
}

/// POST /places/{place_id}/amenities/{amenity_id}
/// 201 when the link is new, 200 when it already existed
pub async fn link_amenity<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, ApiError> {
    let (place_raw, amenity_raw) = path.into_inner();
    let place = fetch::<Place, S>(storage.get_ref(), &place_raw).await?;
    let amenity = fetch::<Amenity, S>(storage.get_ref(), &amenity_raw).await?;

    let created = CatalogService::link_amenity(storage.get_ref(), place, amenity.id).await?;

    if created {
        Ok(HttpResponse::Created().json(amenity))
    } else {
        Ok(HttpResponse::Ok().json(amenity))
    }
}

/// DELETE /places/{place_id}/amenities/{amenity_id}
/// 404 when the amenity is not linked to the place
pub async fn unlink_amenity<S: Storage>(
    storage: web::Data<S>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, ApiError> {
    let (place_raw, amenity_raw) = path.into_inner();
    let place = fetch::<Place, S>(storage.get_ref(), &place_raw).await?;
    let amenity = fetch::<Amenity, S>(storage.get_ref(), &amenity_raw).await?;

    CatalogService::unlink_amenity(storage.get_ref(), place, amenity.id).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for place-amenity routes
pub fn config<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/places/{place_id}/amenities")
            .route(web::get().to(list_place_amenities::<S>)),
    )
    .service(
        web::resource("/places/{place_id}/amenities/{amenity_id}")
            .route(web::post().to(link_amenity::<S>))
            .route(web::delete().to(unlink_amenity::<S>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, State, User};
    use crate::storage::FileStore;
    use actix_web::{http::StatusCode, test, App};

    async fn seeded() -> (web::Data<FileStore>, Place, Amenity) {
        let store = web::Data::new(FileStore::ephemeral());
        let state = State::new("California".to_string());
        let city = City::new("San Francisco".to_string(), state.id);
        let user = User::new("host@example.com".to_string(), "pw".to_string());
        let place = Place::new("Loft".to_string(), city.id, user.id);
        let wifi = Amenity::new("wifi".to_string());

        store.save(state).await.unwrap();
        store.save(city).await.unwrap();
        store.save(user).await.unwrap();
        store.save(place.clone()).await.unwrap();
        store.save(wifi.clone()).await.unwrap();

        (store, place, wifi)
    }

    #[actix_web::test]
    async fn test_link_then_relink_then_unlink() {
        let (store, place, wifi) = seeded().await;
        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .configure(config::<FileStore>),
        )
        .await;

        let uri = format!("/places/{}/amenities/{}", place.id, wifi.id);

        let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // second link is a no-op
        let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // unlinking again is a 404
        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_place_amenities() {
        let (store, place, wifi) = seeded().await;
        CatalogService::link_amenity(store.get_ref(), place.clone(), wifi.id)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .configure(config::<FileStore>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/places/{}/amenities", place.id))
            .to_request();
        let amenities: Vec<Amenity> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0].id, wifi.id);
    }
}
