use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::ports::incoming::use_cases::GetMyCartError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Must be registered before `/carts/{id}`.
#[get("/api/v1/carts/me")]
pub async fn get_my_cart_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cart.get_mine.execute(user.actor()).await {
        Ok(cart) => ApiResponse::success(cart),
        Err(GetMyCartError::RepositoryError(e)) => {
            error!("Repository error loading cart for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, UserId};
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        in_memory::InMemoryStore,
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_first_call_creates_empty_cart() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default().with_store(store.clone()).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_my_cart_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/carts/me")
            .insert_header(("Authorization", bearer(user_id, Role::Customer)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], user_id.to_string());
        assert_eq!(body["data"]["items"], serde_json::json!([]));
        assert!(store.cart_for_user(UserId::from(user_id)).is_some());
    }
}
