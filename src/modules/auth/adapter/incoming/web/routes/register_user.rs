use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Any `role` sent by the client is ignored; new accounts are always customers.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[post("/api/v1/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RegisterUserCommand::new(&req.name, &req.email, &req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User registered");
            ApiResponse::created(session)
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
