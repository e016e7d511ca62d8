use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::ports::incoming::use_cases::DeleteCartError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/v1/carts/{id}")]
pub async fn delete_cart_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cart_id = path.into_inner();

    match data.cart.delete.execute(user.actor(), cart_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, cart_id = %cart_id, "Cart deleted");
            ApiResponse::message("Cart deleted successfully")
        }
        Err(DeleteCartError::CartNotFound) => {
            ApiResponse::not_found("CART_NOT_FOUND", "Cart not found")
        }
        Err(DeleteCartError::Forbidden) => {
            warn!(user_id = %user.user_id, cart_id = %cart_id, "Cart deletion denied");
            ApiResponse::forbidden("FORBIDDEN", "You do not have access to this cart")
        }
        Err(DeleteCartError::RepositoryError(e)) => {
            error!("Repository error deleting cart {}: {}", cart_id, e);
            ApiResponse::internal_error()
        }
    }
}
