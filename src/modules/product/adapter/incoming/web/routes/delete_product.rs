use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::product::application::ports::incoming::use_cases::DeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/v1/products/{id}")]
pub async fn delete_product_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.delete.execute(admin.actor, product_id).await {
        Ok(()) => {
            info!(product_id = %product_id, "Product deleted");
            ApiResponse::message("Product deleted successfully")
        }
        Err(DeleteProductError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(DeleteProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(DeleteProductError::RepositoryError(e)) => {
            error!("Repository error deleting product {}: {}", product_id, e);
            ApiResponse::internal_error()
        }
    }
}
