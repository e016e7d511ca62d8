use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    ResetPasswordCommand, ResetPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub password: String,
}

#[post("/api/v1/auth/reset-password/{token}")]
pub async fn reset_password_handler(
    path: web::Path<String>,
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = path.into_inner();
    let command = match ResetPasswordCommand::new(&token, &req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.reset_password.execute(command).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::message("Password has been reset")
        }
        Err(ResetPasswordError::InvalidOrExpiredToken) => {
            warn!("Password reset rejected: invalid or expired token");
            ApiResponse::bad_request(
                "INVALID_RESET_TOKEN",
                "Reset token is invalid or has expired",
            )
        }
        Err(e) => {
            error!("Password reset failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
