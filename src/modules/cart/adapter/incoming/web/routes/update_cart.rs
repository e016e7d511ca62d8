use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::create_cart::CartItemsRequest;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::ports::incoming::use_cases::{UpdateCartCommand, UpdateCartError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/v1/carts/{id}")]
pub async fn update_cart_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CartItemsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cart_id = path.into_inner();

    let command = match UpdateCartCommand::new(user.actor(), cart_id, &req.items) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.cart.update.execute(command).await {
        Ok(cart) => {
            info!(cart_id = %cart.id, items = cart.items.len(), "Cart updated");
            ApiResponse::success(cart)
        }
        Err(UpdateCartError::CartNotFound) => {
            ApiResponse::not_found("CART_NOT_FOUND", "Cart not found")
        }
        Err(UpdateCartError::Forbidden) => {
            warn!(user_id = %user.user_id, cart_id = %cart_id, "Cart update denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner can change this cart")
        }
        Err(UpdateCartError::RepositoryError(e)) => {
            error!("Repository error updating cart {}: {}", cart_id, e);
            ApiResponse::internal_error()
        }
    }
}
