use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::order::application::domain::OrderId;
use crate::order::application::ports::incoming::use_cases::DeleteOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete: the order stays, with status `cancelled`.
#[delete("/api/v1/orders/{id}")]
pub async fn delete_order_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<OrderId>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.delete.execute(admin.actor, order_id).await {
        Ok(order) => {
            info!(admin_id = %admin.actor.user_id, order_id, "Order cancelled by admin");
            ApiResponse::success(order)
        }
        Err(DeleteOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(DeleteOrderError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage orders")
        }
        Err(DeleteOrderError::RepositoryError(e)) => {
            error!("Repository error deleting order {}: {}", order_id, e);
            ApiResponse::internal_error()
        }
    }
}
