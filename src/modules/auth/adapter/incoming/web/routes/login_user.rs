use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{LoginUserCommand, LoginUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match LoginUserCommand::new(&req.email, &req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(session)
        }
        Err(LoginUserError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginUserError::AccountDeactivated) => {
            warn!("Login rejected: account deactivated");
            ApiResponse::forbidden("ACCOUNT_DEACTIVATED", "This account has been deactivated")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
