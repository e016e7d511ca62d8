use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::auth::application::domain::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    AdminUpdateUserCommand, AdminUpdateUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fields outside this set are ignored.
#[derive(Debug, Deserialize)]
pub struct AdminUpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

#[put("/api/v1/auth/users/{user_id}")]
pub async fn admin_update_user_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    req: web::Json<AdminUpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();
    let req = req.into_inner();

    let command = match AdminUpdateUserCommand::new(
        admin.actor,
        UserId::from(target),
        req.name,
        req.email,
        req.role,
        req.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.admin_update_user.execute(command).await {
        Ok(profile) => {
            info!(admin_id = %admin.actor.user_id, user_id = %target, "User updated by admin");
            ApiResponse::success(profile)
        }
        Err(AdminUpdateUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage users")
        }
        Err(AdminUpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(AdminUpdateUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(AdminUpdateUserError::RepositoryError(e)) => {
            error!("Repository error updating user {}: {}", target, e);
            ApiResponse::internal_error()
        }
    }
}
