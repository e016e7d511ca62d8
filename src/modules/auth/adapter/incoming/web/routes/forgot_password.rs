use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordCommand, ForgotPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// Returns the plaintext reset token in the body; there is no mail delivery.
#[post("/api/v1/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ForgotPasswordCommand::new(&req.email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.forgot_password.execute(command).await {
        Ok(issued) => {
            info!("Password reset token issued");
            ApiResponse::success(issued)
        }
        Err(ForgotPasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "No account with that email")
        }
        Err(ForgotPasswordError::RepositoryError(e)) => {
            error!("Repository error issuing reset token: {}", e);
            ApiResponse::internal_error()
        }
    }
}
