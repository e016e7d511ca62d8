use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[post("/api/v1/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ChangePasswordCommand::new(
        UserId::from(user.user_id),
        &req.current_password,
        &req.new_password,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.change_password.execute(command).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::message("Password updated successfully")
        }
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ChangePasswordError::IncorrectPassword) => {
            warn!(user_id = %user.user_id, "Password change rejected: wrong current password");
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Current password is incorrect")
        }
        Err(e) => {
            error!("Password change failed for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::Role;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        fakes::PlainTextHasher,
        fixtures::user_fixture,
        in_memory::InMemoryStore,
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn seeded() -> (InMemoryStore, Uuid) {
        let store = InMemoryStore::new();
        let user = user_fixture(
            "ada@example.com",
            &PlainTextHasher::hash("secret1"),
            Role::Customer,
        );
        let id = user.id.value();
        store.insert_user(user);
        (store, id)
    }

    async fn call(store: InMemoryStore, user_id: Uuid, body: Value) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/change-password")
            .insert_header(("Authorization", bearer(user_id, Role::Customer)))
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_change_password_success() {
        let (store, id) = seeded();

        let resp = call(
            store.clone(),
            id,
            json!({ "current_password": "secret1", "new_password": "secret2" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let stored = store.user_by_email("ada@example.com").unwrap();
        assert_eq!(stored.password_hash, PlainTextHasher::hash("secret2"));
    }

    #[actix_web::test]
    async fn test_change_password_wrong_current_unauthorized() {
        let (store, id) = seeded();

        let resp = call(
            store,
            id,
            json!({ "current_password": "nope-nope", "new_password": "secret2" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INCORRECT_PASSWORD");
    }

    #[actix_web::test]
    async fn test_change_password_missing_user_not_found() {
        let resp = call(
            InMemoryStore::new(),
            Uuid::new_v4(),
            json!({ "current_password": "secret1", "new_password": "secret2" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_change_password_short_new_password() {
        let (store, id) = seeded();

        let resp = call(
            store,
            id,
            json!({ "current_password": "secret1", "new_password": "123" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
