use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::domain::CartItemInput;
use crate::cart::application::ports::incoming::use_cases::{CreateCartCommand, CreateCartError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CartItemsRequest {
    #[serde(default)]
    pub items: Vec<CartItemInput>,
}

#[post("/api/v1/carts")]
pub async fn create_cart_handler(
    user: AuthenticatedUser,
    req: web::Json<CartItemsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCartCommand::new(user.actor(), &req.items) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.cart.create.execute(command).await {
        Ok(cart) => {
            info!(user_id = %user.user_id, cart_id = %cart.id, "Cart created");
            ApiResponse::created(cart)
        }
        Err(CreateCartError::CartAlreadyExists) => {
            warn!(user_id = %user.user_id, "Cart already exists");
            ApiResponse::conflict("CART_ALREADY_EXISTS", "Cart already exists for this user")
        }
        Err(CreateCartError::RepositoryError(e)) => {
            error!("Repository error creating cart for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
