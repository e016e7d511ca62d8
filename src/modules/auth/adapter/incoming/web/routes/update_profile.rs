use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[put("/api/v1/auth/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match UpdateProfileCommand::new(UserId::from(user.user_id), req.name, req.email)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.update_profile.execute(command).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(profile)
        }
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile {}: {}", user.user_id, e);
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
        fixtures::user_fixture,
        in_memory::InMemoryStore,
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_update_profile_changes_name() {
        let store = InMemoryStore::new();
        let user = user_fixture("ada@example.com", "hash", Role::Customer);
        let user_id = user.id.value();
        store.insert_user(user);

        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", bearer(user_id, Role::Customer)))
            .set_json(json!({ "name": "Ada Lovelace" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Ada Lovelace");
        assert_eq!(body["data"]["email"], "ada@example.com");
    }

    #[actix_web::test]
    async fn test_update_profile_email_taken_conflict() {
        let store = InMemoryStore::new();
        let user = user_fixture("ada@example.com", "hash", Role::Customer);
        let user_id = user.id.value();
        store.insert_user(user);
        store.insert_user(user_fixture("bob@example.com", "hash", Role::Customer));

        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", bearer(user_id, Role::Customer)))
            .set_json(json!({ "email": "BOB@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_update_profile_empty_body_validation_error() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Customer)))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_profile_unknown_user_not_found() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", bearer(Uuid::new_v4(), Role::Customer)))
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }
}
