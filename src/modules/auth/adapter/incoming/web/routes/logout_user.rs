use actix_web::{post, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;

/// Tokens are not revoked server-side; the client discards its copy.
#[post("/api/v1/auth/logout")]
pub async fn logout_user_handler(user: AuthenticatedUser) -> impl Responder {
    info!(user_id = %user.user_id, "User logged out");
    ApiResponse::message("Logged out successfully")
}
