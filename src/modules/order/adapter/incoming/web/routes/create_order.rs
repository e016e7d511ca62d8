use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::order::application::ports::incoming::use_cases::{CreateOrderCommand, CreateOrderError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub payment_method: Option<String>,
}

/// The body is optional, but a body that is present must be valid JSON.
#[post("/api/v1/orders")]
pub async fn create_order_handler(
    user: AuthenticatedUser,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        CreateOrderRequest::default()
    } else {
        match serde_json::from_slice::<CreateOrderRequest>(&body) {
            Ok(req) => req,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        }
    };

    let command = match CreateOrderCommand::new(user.actor(), req.payment_method.as_deref()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.order.create.execute(command).await {
        Ok(order) => {
            info!(user_id = %user.user_id, order_id = order.id, "Order created");
            ApiResponse::created(order)
        }
        Err(CreateOrderError::CartEmpty) => {
            ApiResponse::bad_request("CART_EMPTY", "Cart is empty")
        }
        Err(e @ CreateOrderError::ProductUnavailable(_)) => {
            warn!(user_id = %user.user_id, "{}", e);
            ApiResponse::bad_request("PRODUCT_UNAVAILABLE", &e.to_string())
        }
        Err(e @ CreateOrderError::TotalTooLarge) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(CreateOrderError::RepositoryError(e)) => {
            error!("Repository error creating order for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
