//! End-to-end flows through the real route table over an in-memory store.

pub mod support;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::application::domain::Role;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::tests::support::{
    app_state_builder::TestAppStateBuilder,
    auth_helper::{bearer, token_provider_data},
    in_memory::InMemoryStore,
};

#[actix_web::test]
async fn test_checkout_flow_from_registration_to_cancellation() {
    let store = InMemoryStore::new();
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().with_store(store).build())
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(crate::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "ada@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let customer = format!("Bearer {}", body["data"]["token"].as_str().unwrap());
    let admin = bearer(Uuid::new_v4(), Role::Admin);

    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(("Authorization", admin.clone()))
        .set_json(json!({ "name": "Lighting" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let category_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(("Authorization", admin))
        .set_json(json!({
            "name": "Lamp",
            "category_id": category_id,
            "price_cents": 1250,
            "stock": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let product_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/carts")
        .insert_header(("Authorization", customer.clone()))
        .set_json(json!({ "items": [{ "product_id": product_id, "quantity": 2 }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(("Authorization", customer.clone()))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let order = &body["data"];
    assert_eq!(order["items"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(order["items"][0]["product_id"], product_id.as_str());
    assert_eq!(order["items"][0]["quantity"], 2);
    assert_eq!(order["total_cents"], 2500);
    let order_id = order["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/carts/me")
        .insert_header(("Authorization", customer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"], json!([]));

    let cancel_uri = format!("/api/v1/orders/{}/cancel", order_id);
    let req = test::TestRequest::patch()
        .uri(&cancel_uri)
        .insert_header(("Authorization", customer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "cancelled");

    let req = test::TestRequest::patch()
        .uri(&cancel_uri)
        .insert_header(("Authorization", customer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_password_reset_token_is_single_use() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(crate::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(json!({ "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["reset_token"].as_str().unwrap().to_string();
    let reset_uri = format!("/api/v1/auth/reset-password/{}", token);

    let req = test::TestRequest::post()
        .uri(&reset_uri)
        .set_json(json!({ "password": "brand-new" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&reset_uri)
        .set_json(json!({ "password": "another-one" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_RESET_TOKEN");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "ada@example.com", "password": "brand-new" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "ada@example.com", "password": "secret1" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(crate::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_unparseable_order_id_uses_error_envelope() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(crate::init_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/abc")
        .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Admin)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
