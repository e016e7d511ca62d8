use actix_web::{patch, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::order::application::domain::OrderId;
use crate::order::application::ports::incoming::use_cases::CancelOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/api/v1/orders/{id}/cancel")]
pub async fn cancel_order_handler(
    user: AuthenticatedUser,
    path: web::Path<OrderId>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.cancel.execute(user.actor(), order_id).await {
        Ok(order) => {
            info!(user_id = %user.user_id, order_id, "Order cancelled by owner");
            ApiResponse::success(order)
        }
        Err(CancelOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(e @ CancelOrderError::NotCancellable) => {
            ApiResponse::bad_request("ORDER_NOT_CANCELLABLE", &e.to_string())
        }
        Err(CancelOrderError::RepositoryError(e)) => {
            error!("Repository error cancelling order {}: {}", order_id, e);
            ApiResponse::internal_error()
        }
    }
}
