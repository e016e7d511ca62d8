use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::auth::application::domain::UserId;
use crate::auth::application::ports::incoming::use_cases::AdminDeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/v1/auth/users/{user_id}")]
pub async fn admin_delete_user_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();

    match data
        .auth
        .admin_delete_user
        .execute(admin.actor, UserId::from(target))
        .await
    {
        Ok(()) => {
            info!(admin_id = %admin.actor.user_id, user_id = %target, "User deleted by admin");
            ApiResponse::message("User deleted successfully")
        }
        Err(AdminDeleteUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage users")
        }
        Err(AdminDeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(AdminDeleteUserError::UserHasOrders) => ApiResponse::conflict(
            "USER_HAS_ORDERS",
            "User has placed orders and cannot be deleted",
        ),
        Err(AdminDeleteUserError::RepositoryError(e)) => {
            error!("Repository error deleting user {}: {}", target, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Actor, Role};
    use crate::auth::application::ports::incoming::use_cases::AdminDeleteUserUseCase;
    use crate::order::application::domain::OrderStatus;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        fixtures::{order_fixture, user_fixture},
        in_memory::InMemoryStore,
    };
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct FailingDeleteUser;

    #[async_trait]
    impl AdminDeleteUserUseCase for FailingDeleteUser {
        async fn execute(&self, _actor: Actor, _target: UserId) -> Result<(), AdminDeleteUserError> {
            Err(AdminDeleteUserError::RepositoryError("db down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_admin_deletes_user() {
        let store = InMemoryStore::new();
        let user = user_fixture("ada@example.com", "hash", Role::Customer);
        let id = user.id.value();
        store.insert_user(user);

        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(admin_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/auth/users/{}", id))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(store.user(UserId::from(id)).is_none());
    }

    #[actix_web::test]
    async fn test_user_with_orders_is_not_deleted() {
        let store = InMemoryStore::new();
        let user = user_fixture("ada@example.com", "hash", Role::Customer);
        let id = user.id;
        store.insert_user(user);
        let order = order_fixture(id, OrderStatus::Delivered, true);
        let order_id = order.id;
        store.insert_order(order);

        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(admin_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/auth/users/{}", id.value()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_HAS_ORDERS");
        assert!(store.user(id).is_some());
        assert!(store.order(order_id).is_some());
    }

    #[actix_web::test]
    async fn test_admin_delete_missing_user_not_found() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(admin_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/auth/users/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_admin_delete_repository_error_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_admin_delete_user(FailingDeleteUser)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(admin_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/auth/users/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_customer_cannot_delete_users() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(admin_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/auth/users/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Customer)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
