use actix_web::{get, Responder};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::Role;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub role: Role,
}

/// Echoes the identity carried by the token. No store lookup.
#[get("/api/v1/auth/me")]
pub async fn get_me_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(MeResponse {
        id: user.user_id,
        role: user.role,
    })
}
