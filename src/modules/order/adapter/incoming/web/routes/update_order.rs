use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::order::application::domain::{OrderId, OrderTransitionError};
use crate::order::application::ports::incoming::use_cases::{UpdateOrderCommand, UpdateOrderError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub is_paid: Option<bool>,
}

#[put("/api/v1/orders/{id}")]
pub async fn update_order_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<OrderId>,
    req: web::Json<UpdateOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    let command = match UpdateOrderCommand::new(
        admin.actor,
        order_id,
        req.status.as_deref(),
        req.is_paid,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.order.update.execute(command).await {
        Ok(order) => {
            info!(
                order_id,
                status = %order.status,
                is_paid = order.is_paid,
                "Order updated"
            );
            ApiResponse::success(order)
        }
        Err(UpdateOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(UpdateOrderError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage orders")
        }
        Err(UpdateOrderError::Transition(e @ OrderTransitionError::NothingToUpdate)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateOrderError::Transition(e)) => {
            ApiResponse::bad_request("INVALID_TRANSITION", &e.to_string())
        }
        Err(UpdateOrderError::RepositoryError(e)) => {
            error!("Repository error updating order {}: {}", order_id, e);
            ApiResponse::internal_error()
        }
    }
}
