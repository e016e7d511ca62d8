use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::product::application::ports::incoming::use_cases::{
    ProductPatch, UpdateProductCommand, UpdateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub images: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        ProductPatch {
            name: req.name,
            category_id: req.category_id,
            description: req.description,
            price_cents: req.price_cents,
            stock: req.stock,
            images: req.images,
        }
    }
}

#[put("/api/v1/products/{id}")]
pub async fn update_product_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    let command = match UpdateProductCommand::new(admin.actor, product_id, req.into_inner().into())
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.product.update.execute(command).await {
        Ok(product) => {
            info!(product_id = %product.id, "Product updated");
            ApiResponse::success(product)
        }
        Err(UpdateProductError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(UpdateProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(UpdateProductError::CategoryNotFound) => {
            ApiResponse::bad_request("INVALID_CATEGORY", "Category does not exist")
        }
        Err(UpdateProductError::RepositoryError(e)) => {
            error!("Repository error updating product {}: {}", product_id, e);
            ApiResponse::internal_error()
        }
    }
}
