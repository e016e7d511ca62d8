use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, AuthenticatedUser, Authorized};
use crate::order::application::domain::OrderId;
use crate::order::application::ports::incoming::use_cases::{GetOrderError, GetOrdersError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/v1/orders")]
pub async fn get_orders_handler(
    admin: Authorized<AdminOnly>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.get_list.execute(admin.actor).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(GetOrdersError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to list orders")
        }
        Err(GetOrdersError::RepositoryError(e)) => {
            error!("Repository error listing orders: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/v1/orders/{id}")]
pub async fn get_order_handler(
    user: AuthenticatedUser,
    path: web::Path<OrderId>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.get_single.execute(user.actor(), order_id).await {
        Ok(order) => ApiResponse::success(order),
        Err(GetOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(GetOrderError::Forbidden) => {
            warn!(user_id = %user.user_id, order_id, "Order access denied");
            ApiResponse::forbidden("FORBIDDEN", "You do not have access to this order")
        }
        Err(GetOrderError::RepositoryError(e)) => {
            error!("Repository error fetching order {}: {}", order_id, e);
            ApiResponse::internal_error()
        }
    }
}
