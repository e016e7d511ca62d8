use actix_web::{get, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::ports::incoming::use_cases::{GetCartError, GetCartsError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/v1/carts")]
pub async fn get_carts_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cart.get_list.execute(user.actor()).await {
        Ok(carts) => ApiResponse::success(carts),
        Err(GetCartsError::Forbidden) => {
            warn!(user_id = %user.user_id, "Cart listing denied");
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to list carts")
        }
        Err(GetCartsError::RepositoryError(e)) => {
            error!("Repository error listing carts: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/v1/carts/{id}")]
pub async fn get_cart_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cart_id = path.into_inner();

    match data.cart.get_single.execute(user.actor(), cart_id).await {
        Ok(cart) => ApiResponse::success(cart),
        Err(GetCartError::CartNotFound) => {
            ApiResponse::not_found("CART_NOT_FOUND", "Cart not found")
        }
        Err(GetCartError::Forbidden) => {
            warn!(user_id = %user.user_id, cart_id = %cart_id, "Cart access denied");
            ApiResponse::forbidden("FORBIDDEN", "You do not have access to this cart")
        }
        Err(GetCartError::RepositoryError(e)) => {
            error!("Repository error fetching cart {}: {}", cart_id, e);
            ApiResponse::internal_error()
        }
    }
}
