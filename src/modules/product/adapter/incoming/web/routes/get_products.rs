use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::product::application::ports::incoming::use_cases::{
    GetProductError, GetProductsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/v1/products")]
pub async fn get_products_handler(data: web::Data<AppState>) -> impl Responder {
    match data.product.get_list.execute().await {
        Ok(products) => ApiResponse::success(products),
        Err(GetProductsError::RepositoryError(e)) => {
            error!("Repository error listing products: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/v1/products/{id}")]
pub async fn get_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.get_single.execute(product_id).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetProductError::RepositoryError(e)) => {
            error!("Repository error fetching product {}: {}", product_id, e);
            ApiResponse::internal_error()
        }
    }
}
